//! Source credentials service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::DiscoveryResult;
use crate::transport::ApiRequest;
use crate::types::credentials::{
    CreateCredentialsOptions, CredentialsList, DeleteCredentials, ListCredentialsOptions,
    SourceCredentials, SourceCredentialsOptions, UpdateCredentialsOptions,
};

const CREDENTIALS_PATH: &str = "/v1/environments/{environment_id}/credentials";
const CREDENTIAL_PATH: &str = "/v1/environments/{environment_id}/credentials/{credential_id}";

/// Source credentials service trait for testability.
#[async_trait]
pub trait CredentialsService: Send + Sync {
    /// Lists the source credentials of an environment.
    async fn list_credentials(
        &self,
        options: ListCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<CredentialsList>>;

    /// Creates source credentials.
    async fn create_credentials(
        &self,
        options: CreateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<SourceCredentials>>;

    /// Gets source credentials. Secret fields are never returned.
    async fn get_source_credentials(
        &self,
        options: SourceCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<SourceCredentials>>;

    /// Updates source credentials.
    async fn update_credentials(
        &self,
        options: UpdateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<SourceCredentials>>;

    /// Deletes source credentials.
    async fn delete_credentials(
        &self,
        options: SourceCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCredentials>>;
}

/// Implementation of the source credentials service.
pub struct CredentialsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl CredentialsServiceImpl {
    /// Creates a new source credentials service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl CredentialsService for CredentialsServiceImpl {
    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn list_credentials(
        &self,
        options: ListCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<CredentialsList>> {
        let request = ApiRequest::get(
            CREDENTIALS_PATH,
            &[("environment_id", options.environment_id.as_str())],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(environment_id = %options.environment_id))]
    async fn create_credentials(
        &self,
        options: CreateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<SourceCredentials>> {
        let request = ApiRequest::post(
            CREDENTIALS_PATH,
            &[("environment_id", options.environment_id.as_str())],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, credential_id = %options.credential_id)
    )]
    async fn get_source_credentials(
        &self,
        options: SourceCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<SourceCredentials>> {
        let request = ApiRequest::get(
            CREDENTIAL_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("credential_id", options.credential_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, credential_id = %options.credential_id)
    )]
    async fn update_credentials(
        &self,
        options: UpdateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<SourceCredentials>> {
        let request = ApiRequest::put(
            CREDENTIAL_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("credential_id", options.credential_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, credential_id = %options.credential_id)
    )]
    async fn delete_credentials(
        &self,
        options: SourceCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCredentials>> {
        let request = ApiRequest::delete(
            CREDENTIAL_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("credential_id", options.credential_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }
}
