//! Shared setup for the wiremock integration tests.

#![allow(dead_code)]

use integrations_discovery::DiscoveryClient;
use wiremock::{MockServer, Request};

/// API version used by every test client.
pub const VERSION: &str = "2017-11-07";

/// `Authorization` value for `user:pass`.
pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

/// Starts a mock server and a client pointed at it with basic credentials.
pub async fn setup() -> (MockServer, DiscoveryClient) {
    let server = MockServer::start().await;
    let client = DiscoveryClient::builder()
        .service_url(server.uri())
        .version(VERSION)
        .username_password("user", "pass")
        .build()
        .expect("Failed to build client");
    (server, client)
}

/// Returns the single request the server received.
pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(requests.len(), 1, "Expected exactly one request");
    requests.remove(0)
}

/// Returns the value of a query parameter of a received request.
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Returns a header of a received request as a string.
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
