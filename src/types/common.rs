//! Types shared across several operation groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transport::MultipartPart;

/// A warning or error raised while ingesting or querying documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Notice identifier.
    #[serde(default)]
    pub notice_id: Option<String>,
    /// When the notice was created.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Document the notice relates to.
    #[serde(default)]
    pub document_id: Option<String>,
    /// Training query the notice relates to.
    #[serde(default)]
    pub query_id: Option<String>,
    /// Severity.
    #[serde(default)]
    pub severity: Option<NoticeSeverity>,
    /// Ingestion step that raised the notice.
    #[serde(default)]
    pub step: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    /// Warning.
    Warning,
    /// Error.
    Error,
    /// Value not known to this client.
    #[serde(other)]
    Unknown,
}

/// A field of an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Path of the field.
    #[serde(default)]
    pub field: Option<String>,
    /// Field type (`nested`, `string`, `date`, `long`, ...).
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
}

/// Fields of one or more collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCollectionFieldsResponse {
    /// The fields.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Disk usage of an environment or collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    /// Bytes used.
    #[serde(default)]
    pub used_bytes: Option<u64>,
    /// Bytes allowed.
    #[serde(default)]
    pub maximum_allowed_bytes: Option<u64>,
}

/// A file to upload in a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    /// File contents.
    pub data: Vec<u8>,
    /// File name reported to the service.
    pub filename: String,
    /// Content type; the service detects it when absent.
    pub content_type: Option<String>,
}

impl FileUpload {
    /// Creates an upload from raw bytes.
    pub fn new(data: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
            content_type: None,
        }
    }

    /// Declares the content type of the file.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Converts the upload into a multipart file part.
    pub(crate) fn into_part(self, name: &str) -> MultipartPart {
        MultipartPart::File {
            name: name.to_string(),
            filename: self.filename,
            content_type: self
                .content_type
                .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string()),
            data: self.data,
        }
    }
}

/// Builds a JSON text part for a multipart request.
pub(crate) fn json_part(name: &str, value: String) -> MultipartPart {
    MultipartPart::Text {
        name: name.to_string(),
        value,
        content_type: Some(mime::APPLICATION_JSON.to_string()),
    }
}
