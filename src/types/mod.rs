//! Type definitions for the Discovery API.
//!
//! Each module holds the options structs of one group of operations next to
//! the resources those operations return.

pub mod collections;
pub mod common;
pub mod configurations;
pub mod credentials;
pub mod documents;
pub mod environments;
pub mod queries;
pub mod training;
pub mod user_data;
