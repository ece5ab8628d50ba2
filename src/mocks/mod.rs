//! Mock implementations for testing.

mod transport;

pub use transport::{MockResponse, MockTokenManager, MockTransport};
