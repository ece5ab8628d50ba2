//! Integration tests for the environments service.

mod common;

use common::{setup, single_request, query_value, BASIC_AUTH, VERSION};
use integrations_discovery::types::environments::{
    EnvironmentSize, ListEnvironmentsOptions, ListFieldsOptions, UpdateEnvironmentOptions,
};
use integrations_discovery::{CreateEnvironmentOptions, EnvironmentOptions, EnvironmentsService};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn environment_body() -> serde_json::Value {
    json!({
        "environment_id": "env1",
        "name": "test-env",
        "created": "2017-11-07T10:00:00.000Z",
        "updated": "2017-11-07T10:00:00.000Z",
        "status": "active",
        "read_only": false,
        "size": "S"
    })
}

#[tokio::test]
async fn test_create_environment_sends_exact_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments"))
        .and(query_param("version", VERSION))
        .and(header("Authorization", BASIC_AUTH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "test-env"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(environment_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .environments()
        .create_environment(CreateEnvironmentOptions::new("test-env"))
        .await
        .expect("create_environment failed");

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.result().size, Some(EnvironmentSize::Small));

    let request = single_request(&server).await;
    assert_eq!(request.body, br#"{"name":"test-env"}"#.to_vec());
}

#[tokio::test]
async fn test_update_environment() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/v1/environments/env1"))
        .and(body_json(json!({"description": "updated", "size": "M"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(environment_body()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .environments()
        .update_environment(
            UpdateEnvironmentOptions::new("env1")
                .description("updated")
                .size(EnvironmentSize::Medium),
        )
        .await
        .expect("update_environment failed");
}

#[tokio::test]
async fn test_list_environments() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(query_param("name", "test-env"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"environments": [environment_body()]})),
        )
        .mount(&server)
        .await;

    let response = client
        .environments()
        .list_environments(ListEnvironmentsOptions::new().name("test-env"))
        .await
        .expect("list_environments failed");

    assert_eq!(response.result().environments.len(), 1);

    let request = single_request(&server).await;
    // version is always the first parameter
    assert_eq!(
        request.url.query(),
        Some("version=2017-11-07&name=test-env")
    );
}

#[tokio::test]
async fn test_get_and_delete_environment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(environment_body()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/env1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"environment_id": "env1", "status": "deleted"})),
        )
        .mount(&server)
        .await;

    let environment = client
        .environments()
        .get_environment(EnvironmentOptions::new("env1"))
        .await
        .expect("get_environment failed")
        .into_result();
    assert_eq!(environment.name.as_deref(), Some("test-env"));

    let deleted = client
        .environments()
        .delete_environment(EnvironmentOptions::new("env1"))
        .await
        .expect("delete_environment failed");
    assert_eq!(deleted.result().status, "deleted");
}

#[tokio::test]
async fn test_list_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fields": [
                {"field": "warnings", "type": "nested"},
                {"field": "warnings.properties.description", "type": "string"}
            ]
        })))
        .mount(&server)
        .await;

    let response = client
        .environments()
        .list_fields(ListFieldsOptions::new("env1", ["col1", "col2"]))
        .await
        .expect("list_fields failed");

    assert_eq!(response.result().fields.len(), 2);
    let request = single_request(&server).await;
    assert_eq!(query_value(&request, "collection_ids").as_deref(), Some("col1,col2"));
}
