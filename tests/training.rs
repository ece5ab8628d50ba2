//! Integration tests for the training data service.

mod common;

use common::{setup, single_request};
use integrations_discovery::types::training::{
    AddTrainingDataOptions, CreateTrainingExampleOptions, TrainingExample, TrainingExampleOptions,
    TrainingQueryOptions, UpdateTrainingExampleOptions,
};
use integrations_discovery::{CollectionOptions, TrainingService};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

const TRAINING_PATH: &str = "/v1/environments/env1/collections/col1/training_data";

#[tokio::test]
async fn test_add_training_data() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(TRAINING_PATH))
        .and(body_json(json!({
            "natural_language_query": "reset password",
            "examples": [{"document_id": "doc1", "relevance": 10}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query_id": "q1",
            "natural_language_query": "reset password",
            "examples": [{"document_id": "doc1", "relevance": 10}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .training()
        .add_training_data(
            AddTrainingDataOptions::new("env1", "col1")
                .natural_language_query("reset password")
                .examples(vec![TrainingExample::new("doc1", 10)]),
        )
        .await
        .expect("add_training_data failed");

    assert_eq!(response.result().query_id.as_deref(), Some("q1"));
    assert_eq!(response.result().examples[0], TrainingExample::new("doc1", 10));
}

#[tokio::test]
async fn test_list_and_delete_all_training_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(TRAINING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "environment_id": "env1",
            "collection_id": "col1",
            "queries": [{"query_id": "q1", "examples": []}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(TRAINING_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let listed = client
        .training()
        .list_training_data(CollectionOptions::new("env1", "col1"))
        .await
        .expect("list_training_data failed");
    assert_eq!(listed.result().queries.len(), 1);

    let deleted = client
        .training()
        .delete_all_training_data(CollectionOptions::new("env1", "col1"))
        .await
        .expect("delete_all_training_data failed");
    assert_eq!(deleted.status_code(), 204);
}

#[tokio::test]
async fn test_training_query_and_examples() {
    let (server, client) = setup().await;
    let query_path = format!("{}/q1", TRAINING_PATH);
    let examples_path = format!("{}/q1/examples", TRAINING_PATH);
    let example_path = format!("{}/q1/examples/doc1", TRAINING_PATH);

    Mock::given(method("GET"))
        .and(path(query_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"query_id": "q1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(examples_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "examples": [{"document_id": "doc1", "relevance": 5}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(example_path.as_str()))
        .and(body_json(json!({"relevance": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document_id": "doc1",
            "relevance": 0
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(example_path.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let query = client
        .training()
        .get_training_data(TrainingQueryOptions::new("env1", "col1", "q1"))
        .await
        .expect("get_training_data failed");
    assert_eq!(query.result().query_id.as_deref(), Some("q1"));

    let examples = client
        .training()
        .list_training_examples(TrainingQueryOptions::new("env1", "col1", "q1"))
        .await
        .expect("list_training_examples failed");
    assert_eq!(examples.result().examples[0].relevance, Some(5));

    let updated = client
        .training()
        .update_training_example(
            UpdateTrainingExampleOptions::new("env1", "col1", "q1", "doc1").relevance(0),
        )
        .await
        .expect("update_training_example failed");
    assert_eq!(updated.result().relevance, Some(0));

    client
        .training()
        .delete_training_example(TrainingExampleOptions::new("env1", "col1", "q1", "doc1"))
        .await
        .expect("delete_training_example failed");
}

#[tokio::test]
async fn test_create_training_example() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/q1/examples", TRAINING_PATH).as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "document_id": "doc2",
            "relevance": 8
        })))
        .mount(&server)
        .await;

    let response = client
        .training()
        .create_training_example(
            CreateTrainingExampleOptions::new("env1", "col1", "q1")
                .document_id("doc2")
                .relevance(8),
        )
        .await
        .expect("create_training_example failed");

    assert_eq!(response.status_code(), 201);
    let request = single_request(&server).await;
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body, json!({"document_id": "doc2", "relevance": 8}));
}
