//! Query types.
//!
//! The four GET-style query operations share one set of parameters,
//! [`QueryParams`]. Each options type exposes the same fluent setters for
//! them and serializes only the parameters that were set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::common::Notice;
use crate::transport::ApiRequest;

/// Header that opts a query out of request logging.
pub const LOGGING_OPT_OUT_HEADER: &str = "X-Watson-Logging-Opt-Out";

/// Query string parameters shared by the query and notices operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Filter in the query language; cached and not scored.
    pub filter: Option<String>,
    /// Query in the query language.
    pub query: Option<String>,
    /// Natural language query.
    pub natural_language_query: Option<String>,
    /// Whether to return passages.
    pub passages: Option<bool>,
    /// Aggregation expression.
    pub aggregation: Option<String>,
    /// Number of results to return.
    pub count: Option<u32>,
    /// Fields to return.
    pub return_fields: Option<Vec<String>>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort fields, prefixed with `-` for descending.
    pub sort: Option<Vec<String>>,
    /// Whether to return highlights.
    pub highlight: Option<bool>,
    /// Fields passages are drawn from.
    pub passages_fields: Option<Vec<String>>,
    /// Maximum number of passages.
    pub passages_count: Option<u32>,
    /// Approximate passage length in characters.
    pub passages_characters: Option<u32>,
    /// Whether to remove duplicate results.
    pub deduplicate: Option<bool>,
    /// Field used for duplicate detection.
    pub deduplicate_field: Option<String>,
    /// Whether to return documents similar to `similar_document_ids`.
    pub similar: Option<bool>,
    /// Documents to find similar documents for.
    pub similar_document_ids: Option<Vec<String>>,
    /// Fields used for similarity.
    pub similar_fields: Option<Vec<String>>,
}

impl QueryParams {
    /// Appends every set parameter to the request.
    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("filter", self.filter.as_deref())
            .query_opt("query", self.query.as_deref())
            .query_opt("natural_language_query", self.natural_language_query.as_deref())
            .query_opt("passages", self.passages)
            .query_opt("aggregation", self.aggregation.as_deref())
            .query_opt("count", self.count)
            .query_list_opt("return", self.return_fields.as_ref())
            .query_opt("offset", self.offset)
            .query_list_opt("sort", self.sort.as_ref())
            .query_opt("highlight", self.highlight)
            .query_list_opt("passages.fields", self.passages_fields.as_ref())
            .query_opt("passages.count", self.passages_count)
            .query_opt("passages.characters", self.passages_characters)
            .query_opt("deduplicate", self.deduplicate)
            .query_opt("deduplicate.field", self.deduplicate_field.as_deref())
            .query_opt("similar", self.similar)
            .query_list_opt("similar.document_ids", self.similar_document_ids.as_ref())
            .query_list_opt("similar.fields", self.similar_fields.as_ref())
    }
}

fn strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// Generates the shared query parameter setters on an options type with a
/// `params: QueryParams` field.
macro_rules! query_param_setters {
    ($options:ty) => {
        impl $options {
            /// Sets the filter.
            pub fn filter(mut self, filter: impl Into<String>) -> Self {
                self.params.filter = Some(filter.into());
                self
            }

            /// Sets the query.
            pub fn query(mut self, query: impl Into<String>) -> Self {
                self.params.query = Some(query.into());
                self
            }

            /// Sets the natural language query.
            pub fn natural_language_query(mut self, query: impl Into<String>) -> Self {
                self.params.natural_language_query = Some(query.into());
                self
            }

            /// Requests passages.
            pub fn passages(mut self, passages: bool) -> Self {
                self.params.passages = Some(passages);
                self
            }

            /// Sets the aggregation.
            pub fn aggregation(mut self, aggregation: impl Into<String>) -> Self {
                self.params.aggregation = Some(aggregation.into());
                self
            }

            /// Sets the number of results.
            pub fn count(mut self, count: u32) -> Self {
                self.params.count = Some(count);
                self
            }

            /// Sets the fields to return.
            pub fn return_fields<I, S>(mut self, fields: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.params.return_fields = Some(strings(fields));
                self
            }

            /// Sets the number of results to skip.
            pub fn offset(mut self, offset: u32) -> Self {
                self.params.offset = Some(offset);
                self
            }

            /// Sets the sort fields.
            pub fn sort<I, S>(mut self, fields: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.params.sort = Some(strings(fields));
                self
            }

            /// Requests highlights.
            pub fn highlight(mut self, highlight: bool) -> Self {
                self.params.highlight = Some(highlight);
                self
            }

            /// Sets the passage fields.
            pub fn passages_fields<I, S>(mut self, fields: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.params.passages_fields = Some(strings(fields));
                self
            }

            /// Sets the maximum number of passages.
            pub fn passages_count(mut self, count: u32) -> Self {
                self.params.passages_count = Some(count);
                self
            }

            /// Sets the approximate passage length.
            pub fn passages_characters(mut self, characters: u32) -> Self {
                self.params.passages_characters = Some(characters);
                self
            }

            /// Requests duplicate removal.
            pub fn deduplicate(mut self, deduplicate: bool) -> Self {
                self.params.deduplicate = Some(deduplicate);
                self
            }

            /// Sets the field used for duplicate detection.
            pub fn deduplicate_field(mut self, field: impl Into<String>) -> Self {
                self.params.deduplicate_field = Some(field.into());
                self
            }

            /// Requests similar documents.
            pub fn similar(mut self, similar: bool) -> Self {
                self.params.similar = Some(similar);
                self
            }

            /// Sets the documents to find similar documents for.
            pub fn similar_document_ids<I, S>(mut self, ids: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.params.similar_document_ids = Some(strings(ids));
                self
            }

            /// Sets the fields used for similarity.
            pub fn similar_fields<I, S>(mut self, fields: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.params.similar_fields = Some(strings(fields));
                self
            }

            /// Adds a custom request header.
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }
    };
}

/// Options for `query`.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Query parameters.
    pub params: QueryParams,
    /// Sent as the logging opt-out header when set.
    pub logging_opt_out: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl QueryOptions {
    /// Creates options for querying the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            params: QueryParams::default(),
            logging_opt_out: None,
            headers: HashMap::new(),
        }
    }

    /// Opts the query in or out of request logging.
    pub fn logging_opt_out(mut self, opt_out: bool) -> Self {
        self.logging_opt_out = Some(opt_out);
        self
    }
}

query_param_setters!(QueryOptions);

/// Options for `query_notices`.
#[derive(Debug, Clone)]
pub struct QueryNoticesOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Query parameters.
    pub params: QueryParams,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl QueryNoticesOptions {
    /// Creates options for querying the notices of the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            params: QueryParams::default(),
            headers: HashMap::new(),
        }
    }
}

query_param_setters!(QueryNoticesOptions);

/// Options for `federated_query`.
#[derive(Debug, Clone)]
pub struct FederatedQueryOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collections to query.
    pub collection_ids: Vec<String>,
    /// Query parameters.
    pub params: QueryParams,
    /// Sent as the logging opt-out header when set.
    pub logging_opt_out: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl FederatedQueryOptions {
    /// Creates options for querying several collections.
    pub fn new<I, S>(environment_id: impl Into<String>, collection_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            environment_id: environment_id.into(),
            collection_ids: strings(collection_ids),
            params: QueryParams::default(),
            logging_opt_out: None,
            headers: HashMap::new(),
        }
    }

    /// Opts the query in or out of request logging.
    pub fn logging_opt_out(mut self, opt_out: bool) -> Self {
        self.logging_opt_out = Some(opt_out);
        self
    }
}

query_param_setters!(FederatedQueryOptions);

/// Options for `federated_query_notices`.
#[derive(Debug, Clone)]
pub struct FederatedQueryNoticesOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collections to query.
    pub collection_ids: Vec<String>,
    /// Query parameters.
    pub params: QueryParams,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl FederatedQueryNoticesOptions {
    /// Creates options for querying the notices of several collections.
    pub fn new<I, S>(environment_id: impl Into<String>, collection_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            environment_id: environment_id.into(),
            collection_ids: strings(collection_ids),
            params: QueryParams::default(),
            headers: HashMap::new(),
        }
    }
}

query_param_setters!(FederatedQueryNoticesOptions);

/// A query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Document identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Relevance score.
    #[serde(default)]
    pub score: Option<f64>,
    /// Document metadata.
    #[serde(default)]
    pub metadata: Option<Value>,
    /// Collection the result came from.
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Scoring metadata.
    #[serde(default)]
    pub result_metadata: Option<Value>,
    /// Remaining document fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A passage extracted from a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPassage {
    /// Source document.
    #[serde(default)]
    pub document_id: Option<String>,
    /// Passage score.
    #[serde(default)]
    pub passage_score: Option<f64>,
    /// Passage text.
    #[serde(default)]
    pub passage_text: Option<String>,
    /// Start offset in the field.
    #[serde(default)]
    pub start_offset: Option<u64>,
    /// End offset in the field.
    #[serde(default)]
    pub end_offset: Option<u64>,
    /// Field the passage came from.
    #[serde(default)]
    pub field: Option<String>,
}

/// Response from `query` and `federated_query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Number of matching documents.
    #[serde(default)]
    pub matching_results: Option<u64>,
    /// Results.
    #[serde(default)]
    pub results: Vec<QueryResult>,
    /// Aggregation results.
    #[serde(default)]
    pub aggregations: Vec<Value>,
    /// Passages.
    #[serde(default)]
    pub passages: Vec<QueryPassage>,
    /// Number of duplicates removed.
    #[serde(default)]
    pub duplicates_removed: Option<u64>,
    /// Token identifying the query session.
    #[serde(default)]
    pub session_token: Option<String>,
}

/// A notice query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryNoticesResult {
    /// Result identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Relevance score.
    #[serde(default)]
    pub score: Option<f64>,
    /// Collection the result came from.
    #[serde(default)]
    pub collection_id: Option<String>,
    /// HTTP response code of the ingestion.
    #[serde(default)]
    pub code: Option<u16>,
    /// Original file name.
    #[serde(default)]
    pub filename: Option<String>,
    /// File type.
    #[serde(default)]
    pub file_type: Option<String>,
    /// SHA-1 of the document.
    #[serde(default)]
    pub sha1: Option<String>,
    /// Notices raised for the document.
    #[serde(default)]
    pub notices: Vec<Notice>,
    /// Remaining fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Response from `query_notices` and `federated_query_notices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    /// Number of matching notices.
    #[serde(default)]
    pub matching_results: Option<u64>,
    /// Results.
    #[serde(default)]
    pub results: Vec<QueryNoticesResult>,
    /// Aggregation results.
    #[serde(default)]
    pub aggregations: Vec<Value>,
    /// Passages.
    #[serde(default)]
    pub passages: Vec<QueryPassage>,
    /// Number of duplicates removed.
    #[serde(default)]
    pub duplicates_removed: Option<u64>,
}

/// An entity mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEntity {
    /// Entity text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Entity type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Whether the text must match exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl QueryEntity {
    /// Creates an entity with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            entity_type: None,
            exact: None,
        }
    }

    /// Sets the entity type.
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Requires an exact text match.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }
}

/// Text context narrowing an entity or relation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryContext {
    /// Context text.
    pub text: String,
}

/// Options for `query_entities`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryEntitiesOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// Entity query feature, for example `disambiguate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    /// Entity to look up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<QueryEntity>,
    /// Context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<QueryContext>,
    /// Number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Number of evidence items per result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_count: Option<u32>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl QueryEntitiesOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            feature: None,
            entity: None,
            context: None,
            count: None,
            evidence_count: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the feature.
    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Sets the entity.
    pub fn entity(mut self, entity: QueryEntity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Sets the context text.
    pub fn context(mut self, text: impl Into<String>) -> Self {
        self.context = Some(QueryContext { text: text.into() });
        self
    }

    /// Sets the number of results.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the number of evidence items.
    pub fn evidence_count(mut self, evidence_count: u32) -> Self {
        self.evidence_count = Some(evidence_count);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// An entity returned by `query_entities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEntitiesResult {
    /// Entity text.
    #[serde(default)]
    pub text: Option<String>,
    /// Entity type.
    #[serde(rename = "type", default)]
    pub entity_type: Option<String>,
    /// Supporting evidence.
    #[serde(default)]
    pub evidence: Vec<Value>,
}

/// Response from `query_entities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEntitiesResponse {
    /// Entities.
    #[serde(default)]
    pub entities: Vec<QueryEntitiesResult>,
}

/// Include and exclude lists of a relation filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilterType {
    /// Values to exclude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    /// Values to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

/// Filter applied to a relation query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRelationsFilter {
    /// Relation types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_types: Option<QueryFilterType>,
    /// Entity types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<QueryFilterType>,
    /// Documents to restrict the query to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
}

/// Options for `query_relations`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRelationsOptions {
    /// Environment identifier.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection identifier.
    #[serde(skip)]
    pub collection_id: String,
    /// Entities the relations must involve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<QueryEntity>>,
    /// Context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<QueryContext>,
    /// Sort order, `score` or `frequency`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<QueryRelationsFilter>,
    /// Number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Number of evidence items per result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_count: Option<u32>,
    /// Custom request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl QueryRelationsOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            entities: None,
            context: None,
            sort: None,
            filter: None,
            count: None,
            evidence_count: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the entities.
    pub fn entities(mut self, entities: Vec<QueryEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Sets the context text.
    pub fn context(mut self, text: impl Into<String>) -> Self {
        self.context = Some(QueryContext { text: text.into() });
        self
    }

    /// Sets the sort order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the filter.
    pub fn filter(mut self, filter: QueryRelationsFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the number of results.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the number of evidence items.
    pub fn evidence_count(mut self, evidence_count: u32) -> Self {
        self.evidence_count = Some(evidence_count);
        self
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// An argument of a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRelationsArgument {
    /// Entities of the argument.
    #[serde(default)]
    pub entities: Vec<QueryEntity>,
}

/// A relation returned by `query_relations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRelationsRelationship {
    /// Relation type.
    #[serde(rename = "type", default)]
    pub relation_type: Option<String>,
    /// Number of times the relation was found.
    #[serde(default)]
    pub frequency: Option<u64>,
    /// Arguments.
    #[serde(default)]
    pub arguments: Vec<QueryRelationsArgument>,
    /// Supporting evidence.
    #[serde(default)]
    pub evidence: Vec<Value>,
}

/// Response from `query_relations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRelationsResponse {
    /// Relations.
    #[serde(default)]
    pub relations: Vec<QueryRelationsRelationship>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query_pairs(params: &QueryParams) -> Vec<(String, String)> {
        params.apply(ApiRequest::get("/q", &[]).unwrap()).query
    }

    #[test]
    fn test_unset_params_are_omitted() {
        assert!(query_pairs(&QueryParams::default()).is_empty());
    }

    #[test]
    fn test_set_params_are_serialized() {
        let options = QueryOptions::new("env1", "col1")
            .natural_language_query("what is rust")
            .highlight(true)
            .count(5)
            .return_fields(["title", "url"])
            .passages_count(3);

        assert_eq!(
            query_pairs(&options.params),
            vec![
                ("natural_language_query".to_string(), "what is rust".to_string()),
                ("count".to_string(), "5".to_string()),
                ("return".to_string(), "title,url".to_string()),
                ("highlight".to_string(), "true".to_string()),
                ("passages.count".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_false_is_sent() {
        let options = QueryNoticesOptions::new("env1", "col1").deduplicate(false);
        assert_eq!(
            query_pairs(&options.params),
            vec![("deduplicate".to_string(), "false".to_string())]
        );
    }

    #[test]
    fn test_entities_body() {
        let options = QueryEntitiesOptions::new("env1", "col1")
            .feature("disambiguate")
            .entity(QueryEntity::new("IBM").entity_type("Company"));

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({
                "feature": "disambiguate",
                "entity": {"text": "IBM", "type": "Company"}
            })
        );
    }

    #[test]
    fn test_relations_body() {
        let options = QueryRelationsOptions::new("env1", "col1")
            .entities(vec![QueryEntity::new("Watson").exact(true)])
            .sort("frequency")
            .filter(QueryRelationsFilter {
                document_ids: Some(vec!["doc1".to_string()]),
                ..Default::default()
            });

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({
                "entities": [{"text": "Watson", "exact": true}],
                "sort": "frequency",
                "filter": {"document_ids": ["doc1"]}
            })
        );
    }

    #[test]
    fn test_query_response_keeps_document_fields() {
        let json = r#"{
            "matching_results": 24,
            "results": [{
                "id": "watson-generated-id",
                "score": 1.0,
                "collection_id": "col1",
                "title": "Watson Discovery",
                "result_metadata": {"score": 1.0}
            }],
            "aggregations": [{"type": "term", "field": "enriched_text.concepts.text"}],
            "passages": [{"document_id": "watson-generated-id", "passage_score": 9.3, "passage_text": "text"}]
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.matching_results, Some(24));
        assert_eq!(
            response.results[0].fields.get("title"),
            Some(&Value::String("Watson Discovery".to_string()))
        );
        assert_eq!(response.passages[0].passage_score, Some(9.3));
    }
}
