//! Relevancy training data types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A labelled example: a document and its relevance to a training query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Document identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Cross reference, used when the document identifier changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Relevance label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<i64>,
}

impl TrainingExample {
    /// Creates an example for a document with a relevance label.
    pub fn new(document_id: impl Into<String>, relevance: i64) -> Self {
        Self {
            document_id: Some(document_id.into()),
            cross_reference: None,
            relevance: Some(relevance),
        }
    }
}

/// A training query with its labelled examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingQuery {
    /// Query identifier.
    #[serde(default)]
    pub query_id: Option<String>,
    /// Natural language query.
    #[serde(default)]
    pub natural_language_query: Option<String>,
    /// Filter.
    #[serde(default)]
    pub filter: Option<String>,
    /// Examples.
    #[serde(default)]
    pub examples: Vec<TrainingExample>,
}

/// The training data of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDataSet {
    /// Environment identifier.
    #[serde(default)]
    pub environment_id: Option<String>,
    /// Collection identifier.
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Training queries.
    #[serde(default)]
    pub queries: Vec<TrainingQuery>,
}

/// Examples of a training query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExampleList {
    /// Examples.
    #[serde(default)]
    pub examples: Vec<TrainingExample>,
}

/// Options for `add_training_data`.
#[derive(Debug, Clone, Serialize)]
pub struct AddTrainingDataOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// Natural language query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_language_query: Option<String>,
    /// Filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Examples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<TrainingExample>>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl AddTrainingDataOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            natural_language_query: None,
            filter: None,
            examples: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the natural language query.
    pub fn natural_language_query(mut self, query: impl Into<String>) -> Self {
        self.natural_language_query = Some(query.into());
        self
    }

    /// Sets the filter.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the examples.
    pub fn examples(mut self, examples: Vec<TrainingExample>) -> Self {
        self.examples = Some(examples);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options addressing one training query: get, delete and list examples.
#[derive(Debug, Clone)]
pub struct TrainingQueryOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Query identifier.
    pub query_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl TrainingQueryOptions {
    /// Creates options for the given training query.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `create_training_example`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTrainingExampleOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// Query identifier.
    #[serde(skip)]
    pub query_id: String,
    /// Document identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Cross reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Relevance label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<i64>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateTrainingExampleOptions {
    /// Creates options for the given training query.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            document_id: None,
            cross_reference: None,
            relevance: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the document.
    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    /// Sets the cross reference.
    pub fn cross_reference(mut self, cross_reference: impl Into<String>) -> Self {
        self.cross_reference = Some(cross_reference.into());
        self
    }

    /// Sets the relevance label.
    pub fn relevance(mut self, relevance: i64) -> Self {
        self.relevance = Some(relevance);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `update_training_example`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTrainingExampleOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// Query identifier.
    #[serde(skip)]
    pub query_id: String,
    /// Example identifier.
    #[serde(skip)]
    pub example_id: String,
    /// Cross reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Relevance label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<i64>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateTrainingExampleOptions {
    /// Creates options for the given example.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
        example_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            example_id: example_id.into(),
            cross_reference: None,
            relevance: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the cross reference.
    pub fn cross_reference(mut self, cross_reference: impl Into<String>) -> Self {
        self.cross_reference = Some(cross_reference.into());
        self
    }

    /// Sets the relevance label.
    pub fn relevance(mut self, relevance: i64) -> Self {
        self.relevance = Some(relevance);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `get_training_example` and `delete_training_example`.
#[derive(Debug, Clone)]
pub struct TrainingExampleOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Query identifier.
    pub query_id: String,
    /// Example identifier.
    pub example_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl TrainingExampleOptions {
    /// Creates options for the given example.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
        example_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            example_id: example_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
