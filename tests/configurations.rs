//! Integration tests for the configurations service.

mod common;

use common::{header_value, query_value, setup, single_request};
use integrations_discovery::types::configurations::{
    ConfigurationOptions, CreateConfigurationOptions, Enrichment, ListConfigurationsOptions,
    TestConfigurationStep,
};
use integrations_discovery::{ConfigurationsService, FileUpload, TestConfigurationOptions};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_configuration_with_enrichments() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/env1/configurations"))
        .and(body_json(json!({
            "name": "articles",
            "enrichments": [{
                "enrichment": "natural_language_understanding",
                "source_field": "text",
                "destination_field": "enriched_text"
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "configuration_id": "cfg1",
            "name": "articles"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .configurations()
        .create_configuration(CreateConfigurationOptions::new("env1", "articles").enrichments(vec![
            Enrichment::new("natural_language_understanding", "text", "enriched_text"),
        ]))
        .await
        .expect("create_configuration failed");

    assert_eq!(response.result().configuration_id.as_deref(), Some("cfg1"));
}

#[tokio::test]
async fn test_list_and_delete_configuration() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env1/configurations"))
        .and(query_param("name", "articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "configurations": [{"configuration_id": "cfg1", "name": "articles"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/env1/configurations/cfg1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "configuration_id": "cfg1",
            "status": "deleted",
            "notices": [{"notice_id": "configuration_in_use", "severity": "warning"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listed = client
        .configurations()
        .list_configurations(ListConfigurationsOptions::new("env1").name("articles"))
        .await
        .expect("list_configurations failed");
    assert_eq!(listed.result().configurations[0].name, "articles");

    let deleted = client
        .configurations()
        .delete_configuration(ConfigurationOptions::new("env1", "cfg1"))
        .await
        .expect("delete_configuration failed");
    assert_eq!(deleted.result().status, "deleted");
    assert_eq!(deleted.result().notices.len(), 1);
}

#[tokio::test]
async fn test_preview_configuration_uploads_sample() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/env1/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "configuration_id": "cfg1",
            "status": "completed",
            "snapshots": [{"step": "html_input", "snapshot": {"html": "<p>hi</p>"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .configurations()
        .test_configuration_in_environment(
            TestConfigurationOptions::new("env1")
                .configuration_id("cfg1")
                .step(TestConfigurationStep::HtmlInput)
                .file(FileUpload::new(b"<p>hi</p>".to_vec(), "sample.html")),
        )
        .await
        .expect("test_configuration_in_environment failed");

    assert_eq!(response.result().snapshots[0].step.as_deref(), Some("html_input"));

    let request = single_request(&server).await;
    assert_eq!(query_value(&request, "step").as_deref(), Some("html_input"));
    assert_eq!(query_value(&request, "configuration_id").as_deref(), Some("cfg1"));
    assert!(header_value(&request, "content-type")
        .unwrap_or_default()
        .starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="file"; filename="sample.html""#));
    assert!(!body.contains(r#"name="configuration""#));
}
