//! Integration tests for the queries service.

mod common;

use common::{header_value, query_value, setup, single_request};
use integrations_discovery::types::queries::{
    QueryEntitiesOptions, QueryEntity, QueryNoticesOptions, LOGGING_OPT_OUT_HEADER,
};
use integrations_discovery::{DiscoveryError, FederatedQueryOptions, QueriesService, QueryOptions};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn query_body() -> serde_json::Value {
    json!({
        "matching_results": 1,
        "results": [{
            "id": "doc1",
            "score": 1.5,
            "collection_id": "col1",
            "title": "Resetting a password"
        }]
    })
}

#[tokio::test]
async fn test_query_omits_unset_highlight() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/collections/col1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(query_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .queries()
        .query(QueryOptions::new("env1", "col1").natural_language_query("reset password"))
        .await
        .expect("query failed");

    let result = &response.result().results[0];
    assert_eq!(result.id.as_deref(), Some("doc1"));
    assert_eq!(result.fields.get("title"), Some(&json!("Resetting a password")));

    let request = single_request(&server).await;
    assert_eq!(query_value(&request, "highlight"), None);
    assert_eq!(
        query_value(&request, "natural_language_query").as_deref(),
        Some("reset password")
    );
    assert_eq!(header_value(&request, LOGGING_OPT_OUT_HEADER), None);
}

#[tokio::test]
async fn test_query_sends_highlight_and_list_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/collections/col1/query"))
        .and(query_param("highlight", "true"))
        .and(query_param("return", "title,body"))
        .and(query_param("count", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(query_body()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .queries()
        .query(
            QueryOptions::new("env1", "col1")
                .query("enriched_text.concepts.text:password")
                .highlight(true)
                .count(5)
                .return_fields(["title", "body"]),
        )
        .await
        .expect("query failed");
}

#[tokio::test]
async fn test_query_logging_opt_out_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/collections/col1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(query_body()))
        .mount(&server)
        .await;

    client
        .queries()
        .query(QueryOptions::new("env1", "col1").logging_opt_out(true))
        .await
        .expect("query failed");

    let request = single_request(&server).await;
    assert_eq!(
        header_value(&request, LOGGING_OPT_OUT_HEADER).as_deref(),
        Some("true")
    );
}

#[tokio::test]
async fn test_federated_query_joins_collections() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/query"))
        .and(query_param("collection_ids", "col1,col2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(query_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .queries()
        .federated_query(FederatedQueryOptions::new("env1", ["col1", "col2"]).query("password"))
        .await
        .expect("federated_query failed");

    assert_eq!(response.result().matching_results, Some(1));
}

#[tokio::test]
async fn test_federated_query_requires_collections() {
    let (server, client) = setup().await;

    let err = client
        .queries()
        .federated_query(FederatedQueryOptions::new("env1", Vec::<String>::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_notices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/collections/col1/notices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matching_results": 1,
            "results": [{
                "id": "doc1",
                "code": 200,
                "notices": [{"notice_id": "xpath_not_found", "severity": "warning"}]
            }]
        })))
        .mount(&server)
        .await;

    let response = client
        .queries()
        .query_notices(QueryNoticesOptions::new("env1", "col1").count(10))
        .await
        .expect("query_notices failed");

    let result = &response.result().results[0];
    assert_eq!(result.code, Some(200));
    assert_eq!(result.notices.len(), 1);
}

#[tokio::test]
async fn test_query_entities_posts_json() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/env1/collections/col1/query_entities"))
        .and(body_json(json!({
            "feature": "disambiguate",
            "entity": {"text": "IBM", "type": "Company"},
            "count": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entities": [{"text": "IBM", "type": "Company", "evidence": []}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .queries()
        .query_entities(
            QueryEntitiesOptions::new("env1", "col1")
                .feature("disambiguate")
                .entity(QueryEntity::new("IBM").entity_type("Company"))
                .count(3),
        )
        .await
        .expect("query_entities failed");

    assert_eq!(response.result().entities[0].entity_type.as_deref(), Some("Company"));
}
