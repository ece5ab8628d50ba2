//! Configuration types.
//!
//! A configuration describes how documents are converted, enriched and
//! normalized on their way into a collection. The conversion settings are a
//! deep, service-defined schema and are carried as raw JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{FileUpload, Notice};

/// An enrichment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field the enrichment writes to.
    pub destination_field: String,
    /// Field the enrichment reads from.
    pub source_field: String,
    /// Whether to overwrite the destination field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Enrichment name, for example `alchemy_language`.
    #[serde(rename = "enrichment")]
    pub enrichment_name: String,
    /// Whether a failing enrichment lets the document continue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_downstream_errors: Option<bool>,
    /// Enrichment-specific options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Enrichment {
    /// Creates an enrichment from a source to a destination field.
    pub fn new(
        enrichment_name: impl Into<String>,
        source_field: impl Into<String>,
        destination_field: impl Into<String>,
    ) -> Self {
        Self {
            description: None,
            destination_field: destination_field.into(),
            source_field: source_field.into(),
            overwrite: None,
            enrichment_name: enrichment_name.into(),
            ignore_downstream_errors: None,
            options: None,
        }
    }
}

/// A normalization applied after enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationOperation {
    /// Operation: `copy`, `move`, `merge`, `remove` or `remove_nulls`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Source field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
    /// Destination field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_field: Option<String>,
}

/// A document configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Configuration identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Name.
    pub name: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document conversion settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Value>,
    /// Enrichments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    /// Normalizations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalizations: Option<Vec<NormalizationOperation>>,
    /// Crawl source settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
}

/// Response from listing configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfigurationsResponse {
    /// The configurations.
    #[serde(default)]
    pub configurations: Vec<Configuration>,
}

/// Response from deleting a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfigurationResponse {
    /// Identifier of the deleted configuration.
    pub configuration_id: String,
    /// Deletion status.
    pub status: String,
    /// Notices, for example collections still using the configuration.
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Snapshot of a document at one ingestion step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Ingestion step.
    #[serde(default)]
    pub step: Option<String>,
    /// Document state after the step.
    #[serde(default)]
    pub snapshot: Option<Value>,
}

/// Result of running a configuration against a sample document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDocument {
    /// Configuration used.
    #[serde(default)]
    pub configuration_id: Option<String>,
    /// Status of the preview.
    #[serde(default)]
    pub status: Option<String>,
    /// Number of enriched field units.
    #[serde(default)]
    pub enriched_field_units: Option<u64>,
    /// Detected media type.
    #[serde(default)]
    pub original_media_type: Option<String>,
    /// Per-step snapshots.
    #[serde(default)]
    pub snapshots: Vec<DocumentSnapshot>,
    /// Notices raised during the preview.
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Ingestion step at which a configuration preview stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestConfigurationStep {
    /// After HTML conversion.
    HtmlInput,
    /// After HTML output.
    HtmlOutput,
    /// After JSON output.
    JsonOutput,
    /// After JSON normalization.
    JsonNormalizationsOutput,
    /// After enrichments.
    EnrichmentsOutput,
    /// After normalizations.
    NormalizationsOutput,
}

impl TestConfigurationStep {
    /// Returns the value sent as the `step` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestConfigurationStep::HtmlInput => "html_input",
            TestConfigurationStep::HtmlOutput => "html_output",
            TestConfigurationStep::JsonOutput => "json_output",
            TestConfigurationStep::JsonNormalizationsOutput => "json_normalizations_output",
            TestConfigurationStep::EnrichmentsOutput => "enrichments_output",
            TestConfigurationStep::NormalizationsOutput => "normalizations_output",
        }
    }
}

impl std::fmt::Display for TestConfigurationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for `create_configuration`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateConfigurationOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Name of the configuration.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Conversion settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Value>,
    /// Enrichments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    /// Normalizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizations: Option<Vec<NormalizationOperation>>,
    /// Crawl source settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateConfigurationOptions {
    /// Creates options for a configuration with the given name.
    pub fn new(environment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: name.into(),
            description: None,
            conversions: None,
            enrichments: None,
            normalizations: None,
            source: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the conversion settings.
    pub fn conversions(mut self, conversions: Value) -> Self {
        self.conversions = Some(conversions);
        self
    }

    /// Sets the enrichments.
    pub fn enrichments(mut self, enrichments: Vec<Enrichment>) -> Self {
        self.enrichments = Some(enrichments);
        self
    }

    /// Sets the normalizations.
    pub fn normalizations(mut self, normalizations: Vec<NormalizationOperation>) -> Self {
        self.normalizations = Some(normalizations);
        self
    }

    /// Sets the crawl source settings.
    pub fn source(mut self, source: Value) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `update_configuration`. The body replaces the stored configuration.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateConfigurationOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Configuration identifier.
    #[serde(skip)]
    pub configuration_id: String,
    /// Name of the configuration.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Conversion settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Value>,
    /// Enrichments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    /// Normalizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizations: Option<Vec<NormalizationOperation>>,
    /// Crawl source settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateConfigurationOptions {
    /// Creates options replacing the given configuration.
    pub fn new(
        environment_id: impl Into<String>,
        configuration_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            configuration_id: configuration_id.into(),
            name: name.into(),
            description: None,
            conversions: None,
            enrichments: None,
            normalizations: None,
            source: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the conversion settings.
    pub fn conversions(mut self, conversions: Value) -> Self {
        self.conversions = Some(conversions);
        self
    }

    /// Sets the enrichments.
    pub fn enrichments(mut self, enrichments: Vec<Enrichment>) -> Self {
        self.enrichments = Some(enrichments);
        self
    }

    /// Sets the normalizations.
    pub fn normalizations(mut self, normalizations: Vec<NormalizationOperation>) -> Self {
        self.normalizations = Some(normalizations);
        self
    }

    /// Sets the crawl source settings.
    pub fn source(mut self, source: Value) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `list_configurations`.
#[derive(Debug, Clone)]
pub struct ListConfigurationsOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Only return configurations with this exact name.
    pub name: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListConfigurationsOptions {
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

/// Options for `get_configuration` and `delete_configuration`.
#[derive(Debug, Clone)]
pub struct ConfigurationOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Configuration identifier.
    pub configuration_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ConfigurationOptions {
    /// Creates options for the given configuration.
    pub fn new(environment_id: impl Into<String>, configuration_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            configuration_id: configuration_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `test_configuration_in_environment`.
#[derive(Debug, Clone)]
pub struct TestConfigurationOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Configuration to test, as a JSON document.
    pub configuration: Option<String>,
    /// Step at which to stop the preview.
    pub step: Option<TestConfigurationStep>,
    /// Stored configuration to test instead of an inline one.
    pub configuration_id: Option<String>,
    /// Sample document.
    pub file: Option<FileUpload>,
    /// Document metadata, as a JSON document.
    pub metadata: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl TestConfigurationOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            configuration: None,
            step: None,
            configuration_id: None,
            file: None,
            metadata: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the inline configuration JSON.
    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Sets the step at which to stop.
    pub fn step(mut self, step: TestConfigurationStep) -> Self {
        self.step = Some(step);
        self
    }

    /// Tests a stored configuration.
    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    /// Sets the sample document.
    pub fn file(mut self, file: FileUpload) -> Self {
        self.file = Some(file);
        self
    }

    /// Sets the metadata JSON.
    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
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
        let options = CreateConfigurationOptions::new("env1", "my-config")
            .enrichments(vec![Enrichment::new("alchemy_language", "text", "enriched_text")]);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({
                "name": "my-config",
                "enrichments": [{
                    "destination_field": "enriched_text",
                    "source_field": "text",
                    "enrichment": "alchemy_language"
                }]
            })
        );
    }

    #[test]
    fn test_configuration_deserialization() {
        let json = r#"{
            "configuration_id": "448e3545-51ca-4530-a03b-6ff282ceac2e",
            "name": "IBM News",
            "created": "2015-08-24T18:42:25.324Z",
            "updated": "2015-08-24T18:42:25.324Z",
            "description": "A configuration useful for ingesting IBM press releases.",
            "conversions": {"html": {"exclude_tags_keep_content": ["span"]}},
            "enrichments": [{
                "destination_field": "alchemy_enriched_text",
                "source_field": "text",
                "enrichment": "alchemy_language",
                "options": {"extract": ["keyword"]}
            }],
            "normalizations": [{"operation": "move", "source_field": "extracted_metadata.title", "destination_field": "metadata.title"}]
        }"#;

        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "IBM News");
        assert_eq!(config.enrichments.as_ref().unwrap()[0].enrichment_name, "alchemy_language");
        assert_eq!(
            config.normalizations.unwrap()[0].operation.as_deref(),
            Some("move")
        );
    }

    #[test]
    fn test_step_values() {
        assert_eq!(TestConfigurationStep::HtmlInput.as_str(), "html_input");
        assert_eq!(
            TestConfigurationStep::NormalizationsOutput.to_string(),
            "normalizations_output"
        );
    }
}
