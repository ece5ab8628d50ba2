//! Observability for the Discovery client.
//!
//! Every request emits `tracing` events: a `debug` event when it is sent and
//! when its response arrives, and a `warn` event for error statuses and
//! token failures. Service methods open a span carrying their resource
//! identifiers. Credentials never appear in events.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
