//! Collections service, including query expansions.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::DiscoveryResult;
use crate::transport::ApiRequest;
use crate::types::collections::{
    Collection, CollectionOptions, CreateCollectionOptions, CreateExpansionsOptions,
    DeleteCollectionResponse, Expansions, ListCollectionsOptions, ListCollectionsResponse,
    UpdateCollectionOptions,
};
use crate::types::common::ListCollectionFieldsResponse;

const COLLECTIONS_PATH: &str = "/v1/environments/{environment_id}/collections";
const COLLECTION_PATH: &str = "/v1/environments/{environment_id}/collections/{collection_id}";
const FIELDS_PATH: &str = "/v1/environments/{environment_id}/collections/{collection_id}/fields";
const EXPANSIONS_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/expansions";

/// Collections service trait for testability.
#[async_trait]
pub trait CollectionsService: Send + Sync {
    /// Creates a collection.
    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>>;

    /// Lists collections, optionally filtered by name.
    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionsResponse>>;

    /// Gets a collection.
    async fn get_collection(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>>;

    /// Updates a collection.
    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>>;

    /// Deletes a collection.
    async fn delete_collection(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCollectionResponse>>;

    /// Lists the fields of a collection.
    async fn list_collection_fields(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>>;

    /// Lists the query expansions of a collection.
    async fn list_expansions(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>>;

    /// Replaces the query expansions of a collection.
    async fn create_expansions(
        &self,
        options: CreateExpansionsOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>>;

    /// Removes every query expansion of a collection.
    async fn delete_expansions(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;
}

/// Implementation of the collections service.
pub struct CollectionsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl CollectionsServiceImpl {
    /// Creates a new collections service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

fn collection_request(
    build: fn(&str, &[(&str, &str)]) -> DiscoveryResult<ApiRequest>,
    template: &str,
    options: &CollectionOptions,
) -> DiscoveryResult<ApiRequest> {
    Ok(build(
        template,
        &[
            ("environment_id", options.environment_id.as_str()),
            ("collection_id", options.collection_id.as_str()),
        ],
    )?
    .headers(&options.headers))
}

#[async_trait]
impl CollectionsService for CollectionsServiceImpl {
    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>> {
        let request = ApiRequest::post(
            COLLECTIONS_PATH,
            &[("environment_id", options.environment_id.as_str())],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionsResponse>> {
        let request = ApiRequest::get(
            COLLECTIONS_PATH,
            &[("environment_id", options.environment_id.as_str())],
        )?
        .query_opt("name", options.name.as_deref())
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn get_collection(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>> {
        let request = collection_request(ApiRequest::get, COLLECTION_PATH, &options)?;
        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>> {
        let request = ApiRequest::put(
            COLLECTION_PATH,
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
    async fn delete_collection(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCollectionResponse>> {
        let request = collection_request(ApiRequest::delete, COLLECTION_PATH, &options)?;
        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn list_collection_fields(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>> {
        let request = collection_request(ApiRequest::get, FIELDS_PATH, &options)?;
        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn list_expansions(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>> {
        let request = collection_request(ApiRequest::get, EXPANSIONS_PATH, &options)?;
        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn create_expansions(
        &self,
        options: CreateExpansionsOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>> {
        let request = ApiRequest::post(
            EXPANSIONS_PATH,
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
    async fn delete_expansions(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = collection_request(ApiRequest::delete, EXPANSIONS_PATH, &options)?;
        self.dispatcher.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiscoveryError;
    use crate::mocks::MockResponse;
    use crate::services::test_support::{dispatcher, path_of};
    use crate::transport::HttpMethod;
    use crate::types::collections::Expansion;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_delete_collection_path_without_body() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::json(
            &serde_json::json!({"collection_id": "col1", "status": "deleted"}),
        ));
        let service = CollectionsServiceImpl::new(dispatcher);

        let response = service
            .delete_collection(CollectionOptions::new("env1", "col1"))
            .await
            .unwrap();

        assert_eq!(response.result().collection_id, "col1");
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(path_of(&request), "/v1/environments/env1/collections/col1");
        assert_eq!(request.query_param("version").as_deref(), Some("2017-11-07"));
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_create_expansions_body() {
        let (dispatcher, transport) = dispatcher();
        let body = serde_json::json!({"expansions": [{"expanded_terms": ["car", "auto"]}]});
        transport.enqueue_response(MockResponse::json(&body));
        let service = CollectionsServiceImpl::new(dispatcher);

        let response = service
            .create_expansions(CreateExpansionsOptions::new(
                "env1",
                "col1",
                vec![Expansion::synonyms(["car", "auto"])],
            ))
            .await
            .unwrap();

        assert_eq!(response.result().expansions.len(), 1);
        let request = transport.last_request().unwrap();
        assert_eq!(
            path_of(&request),
            "/v1/environments/env1/collections/col1/expansions"
        );
        let sent: serde_json::Value =
            serde_json::from_slice(request.body.as_json().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[tokio::test]
    async fn test_delete_expansions_no_content() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::empty(204));
        let service = CollectionsServiceImpl::new(dispatcher);

        let response = service
            .delete_expansions(CollectionOptions::new("env1", "col1"))
            .await
            .unwrap();

        assert_eq!(response.status_code(), 204);
    }

    #[tokio::test]
    async fn test_custom_headers_are_sent() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::json(&serde_json::json!({"fields": []})));
        let service = CollectionsServiceImpl::new(dispatcher);

        service
            .list_collection_fields(
                CollectionOptions::new("env1", "col1").header("X-Watson-Metadata", "customer_id=c1"),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("X-Watson-Metadata"), Some("customer_id=c1"));
    }

    #[tokio::test]
    async fn test_not_found_keeps_status() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::text(404, "Collection not found"));
        let service = CollectionsServiceImpl::new(dispatcher);

        let err = service
            .get_collection(CollectionOptions::new("env1", "missing"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert!(matches!(err, DiscoveryError::Api { ref message, .. } if message == "Collection not found"));
    }

    #[tokio::test]
    async fn test_unknown_language_is_not_sent() {
        let (dispatcher, transport) = dispatcher();
        let service = CollectionsServiceImpl::new(dispatcher);

        let err = service
            .create_collection(
                CreateCollectionOptions::new("env1", "docs")
                    .language(crate::types::collections::CollectionLanguage::Unknown),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DiscoveryError::Serialization { .. }));
        assert_eq!(transport.request_count(), 0);
    }
}
