//! Discovery Client Library
//!
//! An async Rust client for the Discovery v1 REST API: environments,
//! configurations, collections, documents, queries, relevancy training,
//! source credentials and user data.
//!
//! # Features
//!
//! - **Full API Coverage**: every v1 operation, one options struct per call
//! - **Typed Responses**: results arrive in a generic [`DetailedResponse`]
//!   together with the HTTP status and headers
//! - **Authentication**: HTTP basic credentials or bearer tokens from a
//!   pluggable [`TokenManager`]
//! - **Observability**: `tracing` spans and events, optional subscriber setup
//! - **Testability**: every service is a trait; a mock transport ships behind
//!   the `mocks` feature
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_discovery::{DiscoveryClient, QueriesService, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DiscoveryClient::builder()
//!         .version("2017-11-07")
//!         .username_password("username", "password")
//!         .build()?;
//!
//!     let options = QueryOptions::new("my-environment", "my-collection")
//!         .natural_language_query("how do I reset my password")
//!         .count(5)
//!         .highlight(true);
//!
//!     let response = client.queries().query(options).await?;
//!     println!("status {}", response.status_code());
//!     for result in &response.result().results {
//!         println!("{:?} {:?}", result.id, result.score);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use auth::{StaticTokenManager, TokenManager};
pub use client::{DetailedResponse, DiscoveryClient, DiscoveryClientBuilder};
pub use config::{Credentials, DiscoveryConfig, DiscoveryConfigBuilder};
pub use errors::{DiscoveryError, DiscoveryResult};
pub use services::{
    CollectionsService, ConfigurationsService, CredentialsService, DocumentsService,
    EnvironmentsService, QueriesService, TrainingService, UserDataService,
};

// Type re-exports
pub use types::collections::{
    Collection, CollectionOptions, CreateCollectionOptions, Expansion, Expansions,
};
pub use types::common::{FileUpload, Notice};
pub use types::configurations::{Configuration, TestConfigurationOptions};
pub use types::documents::{AddDocumentOptions, DocumentAccepted, DocumentStatus};
pub use types::environments::{CreateEnvironmentOptions, Environment, EnvironmentOptions};
pub use types::queries::{FederatedQueryOptions, QueryOptions, QueryResponse};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
