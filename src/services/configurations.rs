//! Configurations service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::DiscoveryResult;
use crate::transport::ApiRequest;
use crate::types::common::json_part;
use crate::types::configurations::{
    Configuration, ConfigurationOptions, CreateConfigurationOptions,
    DeleteConfigurationResponse, ListConfigurationsOptions, ListConfigurationsResponse,
    TestConfigurationOptions, TestDocument, UpdateConfigurationOptions,
};

const CONFIGURATIONS_PATH: &str = "/v1/environments/{environment_id}/configurations";
const CONFIGURATION_PATH: &str =
    "/v1/environments/{environment_id}/configurations/{configuration_id}";

/// Configurations service trait for testability.
#[async_trait]
pub trait ConfigurationsService: Send + Sync {
    /// Creates a configuration.
    async fn create_configuration(
        &self,
        options: CreateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>>;

    /// Lists configurations, optionally filtered by name.
    async fn list_configurations(
        &self,
        options: ListConfigurationsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListConfigurationsResponse>>;

    /// Gets a configuration.
    async fn get_configuration(
        &self,
        options: ConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>>;

    /// Replaces a configuration.
    async fn update_configuration(
        &self,
        options: UpdateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>>;

    /// Deletes a configuration.
    async fn delete_configuration(
        &self,
        options: ConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteConfigurationResponse>>;

    /// Runs a configuration against a sample document without indexing it.
    async fn test_configuration_in_environment(
        &self,
        options: TestConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<TestDocument>>;
}

/// Implementation of the configurations service.
pub struct ConfigurationsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl ConfigurationsServiceImpl {
    /// Creates a new configurations service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ConfigurationsService for ConfigurationsServiceImpl {
    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn create_configuration(
        &self,
        options: CreateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>> {
        let request = ApiRequest::post(
            CONFIGURATIONS_PATH,
            &[("environment_id", options.environment_id.as_str())],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn list_configurations(
        &self,
        options: ListConfigurationsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListConfigurationsResponse>> {
        let request = ApiRequest::get(
            CONFIGURATIONS_PATH,
            &[("environment_id", options.environment_id.as_str())],
        )?
        .query_opt("name", options.name.as_deref())
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(
            environment_id = %options.environment_id,
            configuration_id = %options.configuration_id
        )
    )]
    async fn get_configuration(
        &self,
        options: ConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>> {
        let request = ApiRequest::get(
            CONFIGURATION_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("configuration_id", options.configuration_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(
            environment_id = %options.environment_id,
            configuration_id = %options.configuration_id
        )
    )]
    async fn update_configuration(
        &self,
        options: UpdateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>> {
        let request = ApiRequest::put(
            CONFIGURATION_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("configuration_id", options.configuration_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(
            environment_id = %options.environment_id,
            configuration_id = %options.configuration_id
        )
    )]
    async fn delete_configuration(
        &self,
        options: ConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteConfigurationResponse>> {
        let request = ApiRequest::delete(
            CONFIGURATION_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("configuration_id", options.configuration_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn test_configuration_in_environment(
        &self,
        options: TestConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<TestDocument>> {
        let TestConfigurationOptions {
            environment_id,
            configuration,
            step,
            configuration_id,
            file,
            metadata,
            headers,
        } = options;

        let mut parts = Vec::with_capacity(3);
        if let Some(configuration) = configuration {
            parts.push(json_part("configuration", configuration));
        }
        if let Some(file) = file {
            parts.push(file.into_part("file"));
        }
        if let Some(metadata) = metadata {
            parts.push(json_part("metadata", metadata));
        }

        let request = ApiRequest::post(
            "/v1/environments/{environment_id}/preview",
            &[("environment_id", environment_id.as_str())],
        )?
        .query_opt("step", step)
        .query_opt("configuration_id", configuration_id.as_deref())
        .multipart(parts)
        .headers(&headers);

        self.dispatcher.execute(request).await
    }
}
