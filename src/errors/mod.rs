//! Error types for the Discovery client.
//!
//! Every operation reports failures through [`DiscoveryError`]. The variants
//! follow the lifecycle of a call: configuration and validation problems are
//! caught before anything is sent, token acquisition failures abort the call
//! before the network is touched, transport failures carry no response, and
//! API failures keep the status code and headers of the response.

use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for Discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Error type for Discovery client operations.
#[derive(Debug, Clone, Error)]
pub enum DiscoveryError {
    /// Configuration error (invalid service URL, version or credentials).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// An options object failed client-side checks; no request was sent.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
        /// The offending field, when one can be named.
        field: Option<String>,
    },

    /// The token manager could not produce a bearer token; no request was sent.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Error message from the token manager.
        message: String,
    },

    /// Connection, DNS or TLS failure; no response is available.
    #[error("Transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// The transport gave up waiting for a response.
    #[error("Request timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// The service answered with a status outside `[200, 300)`.
    ///
    /// `message` is the raw response body text.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response headers.
        headers: HashMap<String, String>,
        /// Raw response body text.
        message: String,
    },

    /// A successful response body could not be decoded.
    #[error("Failed to decode response (HTTP {status}): {message}")]
    Deserialization {
        /// HTTP status code of the response.
        status: u16,
        /// Decoder error message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// A request body could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl DiscoveryError {
    /// Creates a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DiscoveryError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        DiscoveryError::Configuration {
            message: message.into(),
        }
    }

    /// Builds an API error from a non-2xx response.
    pub(crate) fn from_response(
        status: u16,
        headers: HashMap<String, String>,
        body: &[u8],
    ) -> Self {
        let text = String::from_utf8_lossy(body);
        let message = if text.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            text.into_owned()
        };

        DiscoveryError::Api {
            status,
            headers,
            message,
        }
    }

    /// Returns the HTTP status code, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DiscoveryError::Api { status, .. } => Some(*status),
            DiscoveryError::Deserialization { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response headers of an API error.
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        match self {
            DiscoveryError::Api { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Returns true for 4xx API errors.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    /// Returns true for 5xx API errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(500..=599))
    }

    /// Returns true if the request never left the client.
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            DiscoveryError::Configuration { .. }
                | DiscoveryError::Validation { .. }
                | DiscoveryError::Authentication { .. }
                | DiscoveryError::Serialization { .. }
        )
    }
}

impl From<reqwest::Error> for DiscoveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DiscoveryError::Timeout {
                message: err.to_string(),
            }
        } else {
            DiscoveryError::Transport {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        DiscoveryError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for DiscoveryError {
    fn from(err: url::ParseError) -> Self {
        DiscoveryError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
