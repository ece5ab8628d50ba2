//! User data types.

use std::collections::HashMap;

/// Options for `delete_user_data`.
///
/// Deletes all data associated with a customer identifier, as labelled with
/// the `X-Watson-Metadata` header when the data was added.
#[derive(Debug, Clone)]
pub struct DeleteUserDataOptions {
    /// Customer identifier.
    pub customer_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteUserDataOptions {
    /// Creates options for the given customer.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
