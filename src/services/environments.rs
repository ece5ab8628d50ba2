//! Environments service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::transport::ApiRequest;
use crate::types::common::ListCollectionFieldsResponse;
use crate::types::environments::{
    CreateEnvironmentOptions, DeleteEnvironmentResponse, Environment, EnvironmentOptions,
    ListEnvironmentsOptions, ListEnvironmentsResponse, ListFieldsOptions,
    UpdateEnvironmentOptions,
};

/// Environments service trait for testability.
#[async_trait]
pub trait EnvironmentsService: Send + Sync {
    /// Creates an environment.
    async fn create_environment(
        &self,
        options: CreateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>>;

    /// Lists environments, optionally filtered by name.
    async fn list_environments(
        &self,
        options: ListEnvironmentsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListEnvironmentsResponse>>;

    /// Gets an environment.
    async fn get_environment(
        &self,
        options: EnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>>;

    /// Updates an environment.
    async fn update_environment(
        &self,
        options: UpdateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>>;

    /// Deletes an environment.
    async fn delete_environment(
        &self,
        options: EnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteEnvironmentResponse>>;

    /// Lists the fields of several collections of an environment.
    async fn list_fields(
        &self,
        options: ListFieldsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>>;
}

/// Implementation of the environments service.
pub struct EnvironmentsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl EnvironmentsServiceImpl {
    /// Creates a new environments service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EnvironmentsService for EnvironmentsServiceImpl {
    #[instrument(skip(self, options), fields(name = %options.name))]
    async fn create_environment(
        &self,
        options: CreateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>> {
        let request = ApiRequest::post("/v1/environments", &[])?
            .json(&options)?
            .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options))]
    async fn list_environments(
        &self,
        options: ListEnvironmentsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListEnvironmentsResponse>> {
        let request = ApiRequest::get("/v1/environments", &[])?
            .query_opt("name", options.name.as_deref())
            .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn get_environment(
        &self,
        options: EnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>> {
        let request = ApiRequest::get(
            "/v1/environments/{environment_id}",
            &[("environment_id", options.environment_id.as_str())],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn update_environment(
        &self,
        options: UpdateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>> {
        let request = ApiRequest::put(
            "/v1/environments/{environment_id}",
            &[("environment_id", options.environment_id.as_str())],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn delete_environment(
        &self,
        options: EnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteEnvironmentResponse>> {
        let request = ApiRequest::delete(
            "/v1/environments/{environment_id}",
            &[("environment_id", options.environment_id.as_str())],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn list_fields(
        &self,
        options: ListFieldsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>> {
        if options.collection_ids.is_empty() {
            return Err(DiscoveryError::validation(
                "collection_ids",
                "At least one collection identifier is required",
            ));
        }

        let request = ApiRequest::get(
            "/v1/environments/{environment_id}/fields",
            &[("environment_id", options.environment_id.as_str())],
        )?
        .query_list("collection_ids", &options.collection_ids)
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }
}
