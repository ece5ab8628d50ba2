//! Configuration module for the Discovery client.
//!
//! Holds the service URL, the API version date sent with every request, the
//! credentials and the transport timeout.

use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{StaticTokenManager, TokenManager};
use crate::errors::{DiscoveryError, DiscoveryResult};

/// Default service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/discovery/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Credentials used to authenticate every call.
#[derive(Clone)]
pub enum Credentials {
    /// HTTP basic credentials.
    Basic {
        /// Username.
        username: String,
        /// Password.
        password: SecretString,
    },
    /// Bearer tokens issued by a token manager.
    Bearer(Arc<dyn TokenManager>),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[TOKEN MANAGER]").finish(),
        }
    }
}

/// Configuration for the Discovery client.
#[derive(Clone)]
pub struct DiscoveryConfig {
    /// Service URL, without a trailing slash.
    pub service_url: String,
    /// API version date, sent as the `version` query parameter.
    pub version: String,
    /// Credentials.
    pub credentials: Credentials,
    /// Request timeout.
    pub timeout: Duration,
    /// Headers sent with every request.
    pub default_headers: Vec<(String, String)>,
    /// Suffix appended to the User-Agent header.
    pub user_agent_suffix: Option<String>,
}

impl DiscoveryConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> DiscoveryConfigBuilder {
        DiscoveryConfigBuilder::new()
    }

    /// Returns the User-Agent header value.
    pub fn user_agent(&self) -> String {
        let base = format!("integrations-discovery/{}", env!("CARGO_PKG_VERSION"));
        match &self.user_agent_suffix {
            Some(suffix) => format!("{} {}", base, suffix),
            None => base,
        }
    }
}

impl std::fmt::Debug for DiscoveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryConfig")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers.len())
            .finish()
    }
}

/// Builder for `DiscoveryConfig`.
#[derive(Default)]
pub struct DiscoveryConfigBuilder {
    service_url: Option<String>,
    version: Option<String>,
    username: Option<String>,
    password: Option<String>,
    token_manager: Option<Arc<dyn TokenManager>>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    user_agent_suffix: Option<String>,
}

impl DiscoveryConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Sets the API version date (for example `2017-11-07`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Uses HTTP basic authentication.
    pub fn username_password(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Uses bearer tokens from the given token manager.
    pub fn token_manager(mut self, manager: Arc<dyn TokenManager>) -> Self {
        self.token_manager = Some(manager);
        self
    }

    /// Uses a fixed, caller-managed bearer token.
    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.token_manager(Arc::new(StaticTokenManager::new(token)))
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets a suffix for the User-Agent header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> DiscoveryResult<DiscoveryConfig> {
        let version = self
            .version
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| DiscoveryError::configuration("API version is required"))?;

        let service_url = self
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if has_bad_first_or_last_char(&service_url) {
            return Err(DiscoveryError::configuration(
                "The service URL must not start or end with '{', '}' or '\"'",
            ));
        }

        if !service_url.starts_with("http://") && !service_url.starts_with("https://") {
            return Err(DiscoveryError::configuration(
                "Service URL must start with http:// or https://",
            ));
        }
        url::Url::parse(&service_url)?;

        let credentials = match (self.username, self.password, self.token_manager) {
            (_, _, Some(manager)) => Credentials::Bearer(manager),
            (Some(username), Some(password), None) => {
                if username.is_empty() || password.is_empty() {
                    return Err(DiscoveryError::configuration(
                        "Username and password cannot be empty",
                    ));
                }
                if has_bad_first_or_last_char(&username) || has_bad_first_or_last_char(&password)
                {
                    return Err(DiscoveryError::configuration(
                        "The username and password must not start or end with '{', '}' or '\"'",
                    ));
                }
                Credentials::Basic {
                    username,
                    password: SecretString::new(password),
                }
            }
            _ => {
                return Err(DiscoveryError::configuration(
                    "Credentials are required: set a username and password or a token manager",
                ))
            }
        };

        Ok(DiscoveryConfig {
            service_url,
            version,
            credentials,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            default_headers: self.default_headers,
            user_agent_suffix: self.user_agent_suffix,
        })
    }
}

/// Catches credentials pasted together with their JSON quoting.
fn has_bad_first_or_last_char(value: &str) -> bool {
    const BAD: [char; 3] = ['{', '}', '"'];
    value.starts_with(BAD) || value.ends_with(BAD)
}
