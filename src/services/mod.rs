//! Service implementations for the Discovery API.
//!
//! One service per group of operations:
//!
//! - `environments` - environments and their fields
//! - `configurations` - document processing configurations and previews
//! - `collections` - collections and query expansions
//! - `documents` - document upload, status and removal
//! - `queries` - search, notices, entity and relation queries
//! - `training` - relevancy training data
//! - `credentials` - credentials for crawled sources
//! - `user_data` - deletion of labelled customer data
//!
//! Every service is a trait with a `*ServiceImpl` backed by the shared
//! [`Dispatcher`](crate::client::Dispatcher).

pub mod collections;
pub mod configurations;
pub mod credentials;
pub mod documents;
pub mod environments;
pub mod queries;
pub mod training;
pub mod user_data;

pub use collections::{CollectionsService, CollectionsServiceImpl};
pub use configurations::{ConfigurationsService, ConfigurationsServiceImpl};
pub use credentials::{CredentialsService, CredentialsServiceImpl};
pub use documents::{DocumentsService, DocumentsServiceImpl};
pub use environments::{EnvironmentsService, EnvironmentsServiceImpl};
pub use queries::{QueriesService, QueriesServiceImpl};
pub use training::{TrainingService, TrainingServiceImpl};
pub use user_data::{UserDataService, UserDataServiceImpl};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::client::Dispatcher;
    use crate::config::DiscoveryConfig;
    use crate::mocks::MockTransport;

    pub(crate) const SERVICE_URL: &str = "https://discovery.example.com/api";
    pub(crate) const VERSION: &str = "2017-11-07";

    /// Dispatcher over a mock transport, with basic credentials.
    pub(crate) fn dispatcher() -> (Arc<Dispatcher>, Arc<MockTransport>) {
        let config = DiscoveryConfig::builder()
            .service_url(SERVICE_URL)
            .version(VERSION)
            .username_password("user", "pass")
            .build()
            .unwrap();
        let transport = Arc::new(MockTransport::new());
        (Arc::new(Dispatcher::new(&config, transport.clone())), transport)
    }

    /// Path of a recorded request, relative to the service URL.
    pub(crate) fn path_of(request: &crate::transport::HttpRequest) -> String {
        request
            .url
            .path()
            .trim_start_matches("/api")
            .to_string()
    }
}
