//! Operation-level request description.
//!
//! An [`ApiRequest`] is what a service method hands to the dispatcher: a
//! resolved path, the operation's own query parameters, its body and any
//! caller-supplied headers. The dispatcher adds everything that is common to
//! every call (service URL, `version`, `Accept`, authentication).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::collections::HashMap;

use super::{HttpMethod, MultipartPart, RequestBody};
use crate::errors::{DiscoveryError, DiscoveryResult};

/// Characters left as-is when a value is substituted into a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Substitutes `{name}` placeholders in a path template.
///
/// The template is scanned once from left to right; each value is
/// percent-encoded into exactly one path segment and never scanned again.
/// Every placeholder must have a non-empty value other than `.` or `..`.
pub fn resolve_path(template: &str, params: &[(&str, &str)]) -> DiscoveryResult<String> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        resolved.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| DiscoveryError::Validation {
            message: format!("Unterminated placeholder in path template '{}'", template),
            field: None,
        })?;
        let name = &after[..end];

        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| DiscoveryError::Validation {
                message: format!("No value supplied for path parameter '{}'", name),
                field: Some(name.to_string()),
            })?;

        if value.is_empty() {
            return Err(DiscoveryError::validation(
                name,
                format!("{} cannot be empty", name),
            ));
        }

        // dot segments survive encoding and would be collapsed by URL parsing
        if value == "." || value == ".." {
            return Err(DiscoveryError::validation(
                name,
                format!("{} cannot be '{}'", name, value),
            ));
        }

        resolved.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[end + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

/// A request for one remote operation.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Resolved path, relative to the service URL.
    pub path: String,
    /// Operation query parameters, in insertion order.
    pub query: Vec<(String, String)>,
    /// Caller-supplied headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: RequestBody,
}

impl ApiRequest {
    /// Creates a request by resolving a path template.
    pub fn new(
        method: HttpMethod,
        template: &str,
        params: &[(&str, &str)],
    ) -> DiscoveryResult<Self> {
        Ok(Self {
            method,
            path: resolve_path(template, params)?,
            query: Vec::new(),
            headers: HashMap::new(),
            body: RequestBody::Empty,
        })
    }

    /// Creates a GET request.
    pub fn get(template: &str, params: &[(&str, &str)]) -> DiscoveryResult<Self> {
        Self::new(HttpMethod::Get, template, params)
    }

    /// Creates a POST request.
    pub fn post(template: &str, params: &[(&str, &str)]) -> DiscoveryResult<Self> {
        Self::new(HttpMethod::Post, template, params)
    }

    /// Creates a PUT request.
    pub fn put(template: &str, params: &[(&str, &str)]) -> DiscoveryResult<Self> {
        Self::new(HttpMethod::Put, template, params)
    }

    /// Creates a DELETE request.
    pub fn delete(template: &str, params: &[(&str, &str)]) -> DiscoveryResult<Self> {
        Self::new(HttpMethod::Delete, template, params)
    }

    /// Adds a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Adds a comma-separated list parameter, omitted when the list is empty.
    pub fn query_list<V: AsRef<str>>(self, name: &str, values: &[V]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.query(name, joined)
    }

    /// Like [`ApiRequest::query_list`] for an optional list.
    pub fn query_list_opt<V: AsRef<str>>(self, name: &str, values: Option<&Vec<V>>) -> Self {
        match values {
            Some(values) => self.query_list(name, values),
            None => self,
        }
    }

    /// Sets a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> DiscoveryResult<Self> {
        self.body = RequestBody::Json(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Sets a multipart body.
    pub fn multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Adds a single header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merges caller-supplied headers verbatim.
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }
}
