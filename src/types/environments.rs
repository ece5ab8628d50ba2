//! Environment types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::DiskUsage;

/// Environment size.
///
/// `Unknown` only appears in responses; serializing it fails, so it can
/// never be sent as a requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentSize {
    /// Lite.
    #[serde(rename = "LT")]
    Lite,
    /// Extra small.
    #[serde(rename = "XS")]
    ExtraSmall,
    /// Small.
    #[serde(rename = "S")]
    Small,
    /// Medium-small.
    #[serde(rename = "MS")]
    MediumSmall,
    /// Medium.
    #[serde(rename = "M")]
    Medium,
    /// Medium-large.
    #[serde(rename = "ML")]
    MediumLarge,
    /// Large.
    #[serde(rename = "L")]
    Large,
    /// Extra large.
    #[serde(rename = "XL")]
    ExtraLarge,
    /// Double extra large.
    #[serde(rename = "XXL")]
    DoubleExtraLarge,
    /// Triple extra large.
    #[serde(rename = "XXXL")]
    TripleExtraLarge,
    /// Value not known to this client.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Environment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentStatus {
    /// Ready for use.
    Active,
    /// Being created.
    Pending,
    /// Under maintenance.
    Maintenance,
    /// Being resized.
    Resizing,
    /// Value not known to this client.
    #[serde(other)]
    Unknown,
}

/// Usage against a maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityUsage {
    /// Remaining capacity.
    #[serde(default)]
    pub available: Option<u64>,
    /// Maximum capacity.
    #[serde(default)]
    pub maximum_allowed: Option<u64>,
}

/// Index capacity of an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexCapacity {
    /// Document capacity.
    #[serde(default)]
    pub documents: Option<CapacityUsage>,
    /// Disk capacity.
    #[serde(default)]
    pub disk_usage: Option<DiskUsage>,
    /// Collection capacity.
    #[serde(default)]
    pub collections: Option<CapacityUsage>,
}

/// A Discovery environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment identifier.
    pub environment_id: String,
    /// Name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// Status.
    #[serde(default)]
    pub status: Option<EnvironmentStatus>,
    /// True for the read-only news environment.
    #[serde(default)]
    pub read_only: Option<bool>,
    /// Size.
    #[serde(default)]
    pub size: Option<EnvironmentSize>,
    /// Index capacity.
    #[serde(default)]
    pub index_capacity: Option<IndexCapacity>,
}

/// Response from listing environments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvironmentsResponse {
    /// The environments.
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Response from deleting an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteEnvironmentResponse {
    /// Identifier of the deleted environment.
    pub environment_id: String,
    /// Deletion status.
    pub status: String,
}

/// Options for `create_environment`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEnvironmentOptions {
    /// Name of the environment.
    pub name: String,
    /// Description of the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Size of the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<EnvironmentSize>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateEnvironmentOptions {
    /// Creates options for an environment with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            size: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: EnvironmentSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `list_environments`.
#[derive(Debug, Clone, Default)]
pub struct ListEnvironmentsOptions {
    /// Only return environments with this exact name.
    pub name: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListEnvironmentsOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `get_environment` and `delete_environment`.
#[derive(Debug, Clone)]
pub struct EnvironmentOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl EnvironmentOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `update_environment`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEnvironmentOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New size; environments can only grow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<EnvironmentSize>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateEnvironmentOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: None,
            description: None,
            size: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: EnvironmentSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `list_fields`.
#[derive(Debug, Clone)]
pub struct ListFieldsOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collections whose fields are listed.
    pub collection_ids: Vec<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListFieldsOptions {
    /// Creates options for the given environment and collections.
    pub fn new<I, S>(environment_id: impl Into<String>, collection_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            environment_id: environment_id.into(),
            collection_ids: collection_ids.into_iter().map(Into::into).collect(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
