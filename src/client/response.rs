//! Response envelope.

use std::collections::HashMap;

/// A decoded result together with the transport metadata it arrived with.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Decoded result.
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Returns the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the decoded result.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Consumes the envelope and returns the decoded result.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Transforms the result while keeping the metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DetailedResponse<U> {
        DetailedResponse {
            status: self.status,
            headers: self.headers,
            result: f(self.result),
        }
    }
}
