//! Request dispatcher shared by every service.
//!
//! A call goes through the same steps whatever the operation: build the URL
//! from the service URL, the resolved path and the query string (always
//! starting with `version`), assemble the headers, authenticate, send, then
//! either decode a 2xx body or turn the response into
//! [`DiscoveryError::Api`].

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

use super::response::DetailedResponse;
use crate::auth::{Authenticator, BasicAuthenticator, BearerTokenAuthenticator};
use crate::config::{Credentials, DiscoveryConfig};
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::transport::{ApiRequest, HttpRequest, HttpResponse, HttpTransport, RequestBody};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Translates [`ApiRequest`]s into HTTP round trips.
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    authenticator: Arc<dyn Authenticator>,
    service_url: String,
    version: String,
    default_headers: Vec<(String, String)>,
    user_agent: String,
}

impl Dispatcher {
    /// Creates a dispatcher from a configuration and a transport.
    pub fn new(config: &DiscoveryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let authenticator: Arc<dyn Authenticator> = match &config.credentials {
            Credentials::Basic { username, password } => {
                Arc::new(BasicAuthenticator::new(username.clone(), password.clone()))
            }
            Credentials::Bearer(manager) => {
                Arc::new(BearerTokenAuthenticator::new(manager.clone()))
            }
        };

        Self::with_authenticator(config, transport, authenticator)
    }

    /// Creates a dispatcher with an explicit authenticator.
    pub fn with_authenticator(
        config: &DiscoveryConfig,
        transport: Arc<dyn HttpTransport>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            transport,
            authenticator,
            service_url: config.service_url.clone(),
            version: config.version.clone(),
            default_headers: config.default_headers.clone(),
            user_agent: config.user_agent(),
        }
    }

    /// Returns the API version sent with every request.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Sends a request and decodes a JSON result.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> DiscoveryResult<DetailedResponse<T>> {
        let response = self.send(request).await?;

        let result = serde_json::from_slice(&response.body).map_err(|e| {
            DiscoveryError::Deserialization {
                status: response.status,
                message: e.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
        })?;

        Ok(DetailedResponse {
            status: response.status,
            headers: response.headers,
            result,
        })
    }

    /// Sends a request whose successful response carries no result.
    pub async fn execute_empty(&self, request: ApiRequest) -> DiscoveryResult<DetailedResponse<()>> {
        let response = self.send(request).await?;

        Ok(DetailedResponse {
            status: response.status,
            headers: response.headers,
            result: (),
        })
    }

    /// Performs the round trip and rejects non-2xx responses.
    async fn send(&self, request: ApiRequest) -> DiscoveryResult<HttpResponse> {
        let url = self.build_url(&request)?;
        let mut headers = self.build_headers(&request);

        self.authenticator.authenticate(&mut headers).await?;

        let method = request.method;
        let path = request.path;
        debug!(method = %method, path = %path, "Sending request");

        let started = Instant::now();
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body: request.body,
            })
            .await
            .map_err(|e| {
                warn!(method = %method, path = %path, error = %e, "Request failed");
                e
            })?;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(
            method = %method,
            path = %path,
            status = response.status,
            elapsed_ms,
            "Received response"
        );

        if !response.is_success() {
            warn!(
                method = %method,
                path = %path,
                status = response.status,
                "Service returned an error status"
            );
            return Err(DiscoveryError::from_response(
                response.status,
                response.headers,
                &response.body,
            ));
        }

        Ok(response)
    }

    /// Builds the absolute URL, with `version` ahead of the operation's parameters.
    pub(crate) fn build_url(&self, request: &ApiRequest) -> DiscoveryResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.service_url, request.path))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("version", &self.version);
            for (name, value) in &request.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Assembles the request headers; custom headers win over defaults.
    pub(crate) fn build_headers(&self, request: &ApiRequest) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for (name, value) in &self.default_headers {
            set_header(&mut headers, name, value);
        }
        set_header(&mut headers, "Accept", JSON_CONTENT_TYPE);
        set_header(&mut headers, "User-Agent", &self.user_agent);

        if let RequestBody::Json(_) = request.body {
            set_header(&mut headers, "Content-Type", JSON_CONTENT_TYPE);
        }

        for (name, value) in &request.headers {
            set_header(&mut headers, name, value);
        }

        headers
    }
}

/// Inserts a header, replacing any existing value regardless of name case.
fn set_header(headers: &mut HashMap<String, String>, name: &str, value: &str) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value.to_string());
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("auth_scheme", &self.authenticator.scheme())
            .finish()
    }
}
