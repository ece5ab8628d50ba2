//! Queries service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::transport::ApiRequest;
use crate::types::queries::{
    FederatedQueryNoticesOptions, FederatedQueryOptions, QueryEntitiesOptions,
    QueryEntitiesResponse, QueryNoticesOptions, QueryNoticesResponse, QueryOptions,
    QueryRelationsOptions, QueryRelationsResponse, QueryResponse, LOGGING_OPT_OUT_HEADER,
};

const COLLECTION_QUERY_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/query";
const COLLECTION_NOTICES_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/notices";
const ENTITIES_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/query_entities";
const RELATIONS_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/query_relations";

/// Queries service trait for testability.
#[async_trait]
pub trait QueriesService: Send + Sync {
    /// Searches a collection.
    async fn query(&self, options: QueryOptions)
        -> DiscoveryResult<DetailedResponse<QueryResponse>>;

    /// Searches the ingestion notices of a collection.
    async fn query_notices(
        &self,
        options: QueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>>;

    /// Searches several collections of an environment.
    async fn federated_query(
        &self,
        options: FederatedQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryResponse>>;

    /// Searches the ingestion notices of several collections.
    async fn federated_query_notices(
        &self,
        options: FederatedQueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>>;

    /// Finds entities in a collection's knowledge graph.
    async fn query_entities(
        &self,
        options: QueryEntitiesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryEntitiesResponse>>;

    /// Finds relations between entities in a collection's knowledge graph.
    async fn query_relations(
        &self,
        options: QueryRelationsOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryRelationsResponse>>;
}

/// Implementation of the queries service.
pub struct QueriesServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl QueriesServiceImpl {
    /// Creates a new queries service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

fn require_collections(collection_ids: &[String]) -> DiscoveryResult<()> {
    if collection_ids.is_empty() {
        return Err(DiscoveryError::validation(
            "collection_ids",
            "At least one collection identifier is required",
        ));
    }
    Ok(())
}

fn with_logging_opt_out(request: ApiRequest, opt_out: Option<bool>) -> ApiRequest {
    match opt_out {
        Some(opt_out) => request.header(LOGGING_OPT_OUT_HEADER, opt_out.to_string()),
        None => request,
    }
}

#[async_trait]
impl QueriesService for QueriesServiceImpl {
    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn query(
        &self,
        options: QueryOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryResponse>> {
        let request = ApiRequest::get(
            COLLECTION_QUERY_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?;
        let request = options.params.apply(request);
        let request = with_logging_opt_out(request, options.logging_opt_out).headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn query_notices(
        &self,
        options: QueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>> {
        let request = ApiRequest::get(
            COLLECTION_NOTICES_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?;
        let request = options.params.apply(request).headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn federated_query(
        &self,
        options: FederatedQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryResponse>> {
        require_collections(&options.collection_ids)?;

        let request = ApiRequest::get(
            "/v1/environments/{environment_id}/query",
            &[("environment_id", options.environment_id.as_str())],
        )?
        .query_list("collection_ids", &options.collection_ids);
        let request = options.params.apply(request);
        let request = with_logging_opt_out(request, options.logging_opt_out).headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn federated_query_notices(
        &self,
        options: FederatedQueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>> {
        require_collections(&options.collection_ids)?;

        let request = ApiRequest::get(
            "/v1/environments/{environment_id}/notices",
            &[("environment_id", options.environment_id.as_str())],
        )?
        .query_list("collection_ids", &options.collection_ids);
        let request = options.params.apply(request).headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn query_entities(
        &self,
        options: QueryEntitiesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryEntitiesResponse>> {
        let request = ApiRequest::post(
            ENTITIES_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn query_relations(
        &self,
        options: QueryRelationsOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryRelationsResponse>> {
        let request = ApiRequest::post(
            RELATIONS_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockResponse;
    use crate::services::test_support::{dispatcher, path_of};
    use crate::transport::HttpMethod;
    use crate::types::queries::QueryEntity;
    use pretty_assertions::assert_eq;

    fn empty_query_response() -> MockResponse {
        MockResponse::json(&serde_json::json!({"matching_results": 0, "results": []}))
    }

    #[tokio::test]
    async fn test_query_highlight_unset_is_omitted() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(empty_query_response());
        let service = QueriesServiceImpl::new(dispatcher);

        service
            .query(QueryOptions::new("env1", "col1").natural_language_query("rust"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(path_of(&request), "/v1/environments/env1/collections/col1/query");
        assert_eq!(request.query_param("highlight"), None);
        assert_eq!(request.header(LOGGING_OPT_OUT_HEADER), None);
    }

    #[tokio::test]
    async fn test_query_highlight_true() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(empty_query_response());
        let service = QueriesServiceImpl::new(dispatcher);

        service
            .query(QueryOptions::new("env1", "col1").highlight(true))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.query_param("highlight").as_deref(), Some("true"));
        // version always leads the query string
        assert!(request.url.query().unwrap().starts_with("version=2017-11-07"));
    }

    #[tokio::test]
    async fn test_query_logging_opt_out_header() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(empty_query_response());
        let service = QueriesServiceImpl::new(dispatcher);

        service
            .query(QueryOptions::new("env1", "col1").logging_opt_out(true))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("X-Watson-Logging-Opt-Out"), Some("true"));
    }

    #[tokio::test]
    async fn test_federated_query() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(empty_query_response());
        let service = QueriesServiceImpl::new(dispatcher);

        service
            .federated_query(
                FederatedQueryOptions::new("env1", ["col1", "col2"])
                    .query("enriched_text.concepts.text:rust")
                    .count(10),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(path_of(&request), "/v1/environments/env1/query");
        assert_eq!(request.query_param("collection_ids").as_deref(), Some("col1,col2"));
        assert_eq!(request.query_param("count").as_deref(), Some("10"));
    }

    #[tokio::test]
    async fn test_federated_notices_requires_collections() {
        let (dispatcher, transport) = dispatcher();
        let service = QueriesServiceImpl::new(dispatcher);

        let err = service
            .federated_query_notices(FederatedQueryNoticesOptions::new(
                "env1",
                Vec::<String>::new(),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, DiscoveryError::Validation { .. }));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_query_notices_path() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::json(&serde_json::json!({"results": []})));
        let service = QueriesServiceImpl::new(dispatcher);

        service
            .query_notices(QueryNoticesOptions::new("env1", "col1").filter("severity:error"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(path_of(&request), "/v1/environments/env1/collections/col1/notices");
        assert_eq!(request.query_param("filter").as_deref(), Some("severity:error"));
    }

    #[tokio::test]
    async fn test_query_entities_posts_json() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::json(&serde_json::json!({
            "entities": [{"text": "IBM", "type": "Company"}]
        })));
        let service = QueriesServiceImpl::new(dispatcher);

        let response = service
            .query_entities(
                QueryEntitiesOptions::new("env1", "col1").entity(QueryEntity::new("IBM")),
            )
            .await
            .unwrap();

        assert_eq!(response.result().entities[0].text.as_deref(), Some("IBM"));
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.body.as_json().unwrap(), br#"{"entity":{"text":"IBM"}}"#);
    }
}
