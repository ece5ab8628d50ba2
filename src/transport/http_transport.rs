//! HTTP transport implementation using reqwest.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::instrument;

use super::{HttpRequest, HttpResponse, HttpTransport, MultipartPart, RequestBody};
use crate::errors::{DiscoveryError, DiscoveryResult};

/// Reqwest-based HTTP transport implementation.
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a new reqwest transport.
    pub fn new(timeout: Duration) -> DiscoveryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| DiscoveryError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    /// Creates a new transport with a custom client.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds a reqwest multipart form from the request parts.
    fn build_form(parts: Vec<MultipartPart>) -> DiscoveryResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();

        for part in parts {
            form = match part {
                MultipartPart::Text {
                    name,
                    value,
                    content_type,
                } => match content_type {
                    Some(content_type) => {
                        let part = reqwest::multipart::Part::text(value)
                            .mime_str(&content_type)
                            .map_err(|e| DiscoveryError::Serialization {
                                message: format!("Invalid content type for '{}': {}", name, e),
                            })?;
                        form.part(name, part)
                    }
                    None => form.text(name, value),
                },
                MultipartPart::File {
                    name,
                    filename,
                    content_type,
                    data,
                } => {
                    let part = reqwest::multipart::Part::bytes(data)
                        .file_name(filename)
                        .mime_str(&content_type)
                        .map_err(|e| DiscoveryError::Serialization {
                            message: format!("Invalid content type for '{}': {}", name, e),
                        })?;
                    form.part(name, part)
                }
            };
        }

        Ok(form)
    }

    /// Converts response headers to a HashMap.
    fn extract_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|val| (k.as_str().to_string(), val.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.url.path()))]
    async fn send(&self, request: HttpRequest) -> DiscoveryResult<HttpResponse> {
        let mut req_builder = self.client.request(request.method.into(), request.url);

        for (name, value) in &request.headers {
            // The multipart encoder owns the content type and its boundary.
            if matches!(request.body, RequestBody::Multipart(_))
                && name.eq_ignore_ascii_case("content-type")
            {
                continue;
            }
            req_builder = req_builder.header(name, value);
        }

        req_builder = match request.body {
            RequestBody::Empty => req_builder,
            RequestBody::Json(bytes) => req_builder.body(bytes),
            RequestBody::Multipart(parts) => req_builder.multipart(Self::build_form(parts)?),
        };

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30)).unwrap();
        assert_eq!(transport.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_build_form_rejects_bad_content_type() {
        let parts = vec![MultipartPart::File {
            name: "file".to_string(),
            filename: "doc.json".to_string(),
            content_type: "not a mime".to_string(),
            data: b"{}".to_vec(),
        }];

        let result = ReqwestTransport::build_form(parts);
        assert!(matches!(result, Err(DiscoveryError::Serialization { .. })));
    }

    #[test]
    fn test_build_form_accepts_text_and_file() {
        let parts = vec![
            MultipartPart::Text {
                name: "metadata".to_string(),
                value: r#"{"author":"a"}"#.to_string(),
                content_type: Some("application/json".to_string()),
            },
            MultipartPart::File {
                name: "file".to_string(),
                filename: "doc.html".to_string(),
                content_type: "text/html".to_string(),
                data: b"<html></html>".to_vec(),
            },
        ];

        assert!(ReqwestTransport::build_form(parts).is_ok());
    }
}
