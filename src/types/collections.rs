//! Collection and query expansion types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::DiskUsage;

/// Collection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    /// Ready for use.
    Active,
    /// Being created.
    Pending,
    /// Under maintenance.
    Maintenance,
    /// Value not known to this client.
    #[serde(other)]
    Unknown,
}

/// Language of the documents in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionLanguage {
    /// English.
    En,
    /// Spanish.
    Es,
    /// German.
    De,
    /// Arabic.
    Ar,
    /// French.
    Fr,
    /// Italian.
    It,
    /// Japanese.
    Ja,
    /// Korean.
    Ko,
    /// Portuguese.
    Pt,
    /// Dutch.
    Nl,
    /// Value not known to this client. Only received, never sent.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Document counts of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCounts {
    /// Indexed documents.
    #[serde(default)]
    pub available: Option<u64>,
    /// Documents being processed.
    #[serde(default)]
    pub processing: Option<u64>,
    /// Documents that failed ingestion.
    #[serde(default)]
    pub failed: Option<u64>,
}

/// Relevancy training status of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatus {
    /// Total training examples.
    #[serde(default)]
    pub total_examples: Option<u64>,
    /// Whether the collection has enough data to train.
    #[serde(default)]
    pub available: Option<bool>,
    /// Whether a training run is in progress.
    #[serde(default)]
    pub processing: Option<bool>,
    /// Whether enough queries are labelled.
    #[serde(default)]
    pub minimum_queries_added: Option<bool>,
    /// Whether enough examples are labelled.
    #[serde(default)]
    pub minimum_examples_added: Option<bool>,
    /// Whether labels are sufficiently varied.
    #[serde(default)]
    pub sufficient_label_diversity: Option<bool>,
    /// Notice count from the last run.
    #[serde(default)]
    pub notices: Option<u64>,
    /// Last successful training.
    #[serde(default)]
    pub successfully_trained: Option<DateTime<Utc>>,
    /// Last data update.
    #[serde(default)]
    pub data_updated: Option<DateTime<Utc>>,
}

/// A document collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier.
    pub collection_id: String,
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
    pub status: Option<CollectionStatus>,
    /// Configuration applied to new documents.
    #[serde(default)]
    pub configuration_id: Option<String>,
    /// Language of the documents.
    #[serde(default)]
    pub language: Option<CollectionLanguage>,
    /// Document counts.
    #[serde(default)]
    pub document_counts: Option<DocumentCounts>,
    /// Disk usage.
    #[serde(default)]
    pub disk_usage: Option<DiskUsage>,
    /// Training status.
    #[serde(default)]
    pub training_status: Option<TrainingStatus>,
}

/// Response from listing collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    /// The collections.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Response from deleting a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCollectionResponse {
    /// Identifier of the deleted collection.
    pub collection_id: String,
    /// Deletion status.
    pub status: String,
}

/// A query expansion rule.
///
/// With `input_terms` the rule is one-way (input terms expand to the
/// expanded terms); without, all expanded terms are treated as synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    /// Terms that trigger the expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_terms: Option<Vec<String>>,
    /// Terms added to the query.
    pub expanded_terms: Vec<String>,
}

impl Expansion {
    /// Creates a bidirectional synonym set.
    pub fn synonyms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input_terms: None,
            expanded_terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a one-way expansion.
    pub fn one_way<I, J, S, T>(input_terms: I, expanded_terms: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            input_terms: Some(input_terms.into_iter().map(Into::into).collect()),
            expanded_terms: expanded_terms.into_iter().map(Into::into).collect(),
        }
    }
}

/// The expansion list of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansions {
    /// Expansion rules.
    #[serde(default)]
    pub expansions: Vec<Expansion>,
}

/// Options for `create_collection`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectionOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Name of the collection.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Configuration applied to new documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Language of the documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CollectionLanguage>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateCollectionOptions {
    /// Creates options for a collection with the given name.
    pub fn new(environment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: name.into(),
            description: None,
            configuration_id: None,
            language: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the configuration.
    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    /// Sets the language.
    pub fn language(mut self, language: CollectionLanguage) -> Self {
        self.language = Some(language);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `update_collection`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCollectionOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateCollectionOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            name: None,
            description: None,
            configuration_id: None,
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

    /// Sets the configuration.
    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `list_collections`.
#[derive(Debug, Clone)]
pub struct ListCollectionsOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Only return collections with this exact name.
    pub name: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListCollectionsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: None,
            headers: HashMap::new(),
        }
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

/// Options addressing a single collection: get, delete, list fields and the
/// expansion operations that take no body.
#[derive(Debug, Clone)]
pub struct CollectionOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl CollectionOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `create_expansions`. Replaces the whole expansion list.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExpansionsOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// Expansion rules.
    pub expansions: Vec<Expansion>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateExpansionsOptions {
    /// Creates options with the given expansion rules.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        expansions: Vec<Expansion>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            expansions,
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_options_body() {
        let options = CreateCollectionOptions::new("env1", "docs").language(CollectionLanguage::En);
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"name":"docs","language":"en"}"#
        );
    }

    #[test]
    fn test_update_options_empty_body() {
        let options = UpdateCollectionOptions::new("env1", "col1");
        assert_eq!(serde_json::to_string(&options).unwrap(), "{}");
    }

    #[test]
    fn test_expansion_serialization() {
        let options = CreateExpansionsOptions::new(
            "env1",
            "col1",
            vec![
                Expansion::synonyms(["car", "automobile"]),
                Expansion::one_way(["ibm"], ["ibm", "big blue"]),
            ],
        );

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({
                "expansions": [
                    {"expanded_terms": ["car", "automobile"]},
                    {"input_terms": ["ibm"], "expanded_terms": ["ibm", "big blue"]}
                ]
            })
        );
    }

    #[test]
    fn test_collection_deserialization() {
        let json = r#"{
            "collection_id": "800e58e4-198d-45eb-be87-74e1d6df4e96",
            "name": "test-collection",
            "configuration_id": "3c4fff84-1500-455c-b125-eaa2d319f6d3",
            "language": "en",
            "status": "active",
            "description": "A test collection",
            "created": "2017-07-14T12:55:40.652Z",
            "updated": "2017-07-14T12:55:40.652Z",
            "document_counts": {"available": 0, "processing": 0, "failed": 0},
            "disk_usage": {"used_bytes": 260},
            "training_status": {"total_examples": 0, "available": false, "processing": false}
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.status, Some(CollectionStatus::Active));
        assert_eq!(collection.language, Some(CollectionLanguage::En));
        assert_eq!(collection.document_counts.unwrap().available, Some(0));
        assert_eq!(collection.disk_usage.unwrap().used_bytes, Some(260));
    }

    #[test]
    fn test_unknown_language_only_received() {
        let collection: Collection =
            serde_json::from_str(r#"{"collection_id":"c1","language":"zh-CN"}"#).unwrap();
        assert_eq!(collection.language, Some(CollectionLanguage::Unknown));

        let options =
            CreateCollectionOptions::new("env1", "docs").language(CollectionLanguage::Unknown);
        assert!(serde_json::to_string(&options).is_err());
    }
}
