//! Discovery API client.

mod dispatcher;
mod response;

pub use dispatcher::Dispatcher;
pub use response::DetailedResponse;

use std::sync::Arc;
use std::time::Duration;

use crate::auth::TokenManager;
use crate::config::{DiscoveryConfig, DiscoveryConfigBuilder};
use crate::errors::DiscoveryResult;
use crate::services::{
    CollectionsServiceImpl, ConfigurationsServiceImpl, CredentialsServiceImpl,
    DocumentsServiceImpl, EnvironmentsServiceImpl, QueriesServiceImpl, TrainingServiceImpl,
    UserDataServiceImpl,
};
use crate::transport::{HttpTransport, ReqwestTransport};

/// The main Discovery client.
///
/// Cloning is cheap; clones share the transport and credentials.
#[derive(Clone)]
pub struct DiscoveryClient {
    config: Arc<DiscoveryConfig>,
    dispatcher: Arc<Dispatcher>,
}

impl DiscoveryClient {
    /// Creates a client that talks to the service over HTTPS.
    pub fn new(config: DiscoveryConfig) -> DiscoveryResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(config: DiscoveryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(&config, transport));
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Creates a new client builder.
    pub fn builder() -> DiscoveryClientBuilder {
        DiscoveryClientBuilder::new()
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Returns the environments service.
    pub fn environments(&self) -> EnvironmentsServiceImpl {
        EnvironmentsServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the configurations service.
    pub fn configurations(&self) -> ConfigurationsServiceImpl {
        ConfigurationsServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the collections service.
    pub fn collections(&self) -> CollectionsServiceImpl {
        CollectionsServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the documents service.
    pub fn documents(&self) -> DocumentsServiceImpl {
        DocumentsServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the queries service.
    pub fn queries(&self) -> QueriesServiceImpl {
        QueriesServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the training data service.
    pub fn training(&self) -> TrainingServiceImpl {
        TrainingServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the source credentials service.
    pub fn credentials(&self) -> CredentialsServiceImpl {
        CredentialsServiceImpl::new(self.dispatcher.clone())
    }

    /// Returns the user data service.
    pub fn user_data(&self) -> UserDataServiceImpl {
        UserDataServiceImpl::new(self.dispatcher.clone())
    }
}

impl std::fmt::Debug for DiscoveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Discovery client.
#[derive(Default)]
pub struct DiscoveryClientBuilder {
    config: DiscoveryConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl DiscoveryClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.service_url(url);
        self
    }

    /// Sets the API version date.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.version(version);
        self
    }

    /// Uses HTTP basic authentication.
    pub fn username_password(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.username_password(username, password);
        self
    }

    /// Uses bearer tokens from the given token manager.
    pub fn token_manager(mut self, manager: Arc<dyn TokenManager>) -> Self {
        self.config = self.config.token_manager(manager);
        self
    }

    /// Uses a fixed bearer token.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.bearer_token(token);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.header(name, value);
        self
    }

    /// Sets a suffix for the User-Agent header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config = self.config.user_agent_suffix(suffix);
        self
    }

    /// Uses a custom transport instead of the default HTTPS transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> DiscoveryResult<DiscoveryClient> {
        let config = self.config.build()?;
        match self.transport {
            Some(transport) => Ok(DiscoveryClient::with_transport(config, transport)),
            None => DiscoveryClient::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiscoveryError;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::services::{EnvironmentsService, UserDataService};
    use crate::types::environments::ListEnvironmentsOptions;
    use crate::types::user_data::DeleteUserDataOptions;

    #[test]
    fn test_builder_requires_version() {
        let err = DiscoveryClient::builder()
            .username_password("user", "pass")
            .build()
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Configuration { .. }));
    }

    #[test]
    fn test_new_client() {
        let config = DiscoveryConfig::builder()
            .version("2017-11-07")
            .username_password("user", "pass")
            .build()
            .unwrap();
        let client = DiscoveryClient::new(config).unwrap();
        assert_eq!(client.config().version, "2017-11-07");
    }

    #[tokio::test]
    async fn test_services_share_transport() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_response(MockResponse::json(&serde_json::json!({"environments": []})));
        transport.enqueue_response(MockResponse::empty(200));

        let client = DiscoveryClient::builder()
            .version("2017-11-07")
            .bearer_token("token")
            .transport(transport.clone())
            .build()
            .unwrap();

        client
            .environments()
            .list_environments(ListEnvironmentsOptions::new())
            .await
            .unwrap();
        client
            .user_data()
            .delete_user_data(DeleteUserDataOptions::new("c1"))
            .await
            .unwrap();

        assert_eq!(transport.request_count(), 2);
        for request in transport.get_requests() {
            assert_eq!(request.header("Authorization"), Some("Bearer token"));
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let client = DiscoveryClient::builder()
            .version("2017-11-07")
            .username_password("user", "hunter2")
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();
        assert!(!format!("{:?}", client).contains("hunter2"));
    }
}
