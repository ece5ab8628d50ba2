//! Authentication module for the Discovery client.
//!
//! Two schemes are supported, selected once per client: HTTP basic
//! credentials, or bearer tokens obtained from a [`TokenManager`] on every
//! call.

use async_trait::async_trait;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{DiscoveryError, DiscoveryResult};

/// Name of the authorization header.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Source of bearer tokens.
///
/// Implementations own token caching and refresh; the client asks for a token
/// before every request and never stores it.
#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Returns a currently valid access token.
    async fn get_token(&self) -> DiscoveryResult<SecretString>;
}

/// Token manager that always serves the same caller-managed token.
pub struct StaticTokenManager {
    token: SecretString,
}

impl StaticTokenManager {
    /// Creates a token manager for a fixed access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn get_token(&self) -> DiscoveryResult<SecretString> {
        if self.token.expose_secret().is_empty() {
            return Err(DiscoveryError::Authentication {
                message: "Access token is empty".to_string(),
            });
        }
        Ok(self.token.clone())
    }
}

impl std::fmt::Debug for StaticTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenManager")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Applies credentials to outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Adds authentication headers. An error aborts the call before sending.
    async fn authenticate(&self, headers: &mut HashMap<String, String>) -> DiscoveryResult<()>;

    /// Returns the authentication scheme name.
    fn scheme(&self) -> &str;
}

/// HTTP basic authentication.
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    /// Creates a basic authenticator.
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password.expose_secret());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        format!("Basic {}", encoded)
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    async fn authenticate(&self, headers: &mut HashMap<String, String>) -> DiscoveryResult<()> {
        headers.insert(AUTHORIZATION_HEADER.to_string(), self.header_value());
        Ok(())
    }

    fn scheme(&self) -> &str {
        "Basic"
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Bearer token authentication backed by a [`TokenManager`].
pub struct BearerTokenAuthenticator {
    token_manager: Arc<dyn TokenManager>,
}

impl BearerTokenAuthenticator {
    /// Creates a bearer authenticator.
    pub fn new(token_manager: Arc<dyn TokenManager>) -> Self {
        Self { token_manager }
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, headers: &mut HashMap<String, String>) -> DiscoveryResult<()> {
        let token = self.token_manager.get_token().await.map_err(|e| {
            tracing::warn!(error = %e, "Token acquisition failed");
            e
        })?;

        headers.insert(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {}", token.expose_secret()),
        );
        Ok(())
    }

    fn scheme(&self) -> &str {
        "Bearer"
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator").finish()
    }
}
