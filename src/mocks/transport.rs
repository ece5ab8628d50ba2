//! Mock transport and token manager.

use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::SecretString;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::auth::TokenManager;
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a 200 response with a JSON body.
    pub fn json<T: serde::Serialize>(body: &T) -> Self {
        Self::json_with_status(200, body)
    }

    /// Creates a JSON response with the given status.
    pub fn json_with_status<T: serde::Serialize>(status: u16, body: &T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status,
            headers,
            body: serde_json::to_vec(body).unwrap_or_default(),
        }
    }

    /// Creates a plain-text response.
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    /// Creates a response without a body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds a response header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

/// Mock transport that records requests and replays queued outcomes.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<DiscoveryResult<MockResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn enqueue_response(&self, response: MockResponse) {
        self.outcomes.lock().push_back(Ok(response));
    }

    /// Queues a transport failure.
    pub fn enqueue_error(&self, error: DiscoveryError) {
        self.outcomes.lock().push_back(Err(error));
    }

    /// Returns all recorded requests.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Returns the last recorded request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    /// Returns the number of requests sent.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> DiscoveryResult<HttpResponse> {
        self.requests.lock().push(request);

        let outcome = self
            .outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(MockResponse::text(500, "No mock response configured")));

        outcome.map(|response| HttpResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
        })
    }
}

/// Token manager returning a fixed token or a fixed error.
pub struct MockTokenManager {
    outcome: Result<String, String>,
    calls: AtomicUsize,
}

impl MockTokenManager {
    /// Creates a token manager that always succeeds.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            outcome: Ok(token.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a token manager that always fails with an authentication error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many tokens were requested.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenManager for MockTokenManager {
    async fn get_token(&self) -> DiscoveryResult<SecretString> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(token) => Ok(SecretString::new(token.clone())),
            Err(message) => Err(DiscoveryError::Authentication {
                message: message.clone(),
            }),
        }
    }
}
