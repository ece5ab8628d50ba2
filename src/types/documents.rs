//! Document ingestion types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{json_part, FileUpload, Notice};
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::transport::MultipartPart;

/// Processing status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentProcessingStatus {
    /// Indexed.
    #[serde(rename = "available")]
    Available,
    /// Indexed, with notices.
    #[serde(rename = "available with notices")]
    AvailableWithNotices,
    /// Ingestion failed.
    #[serde(rename = "failed")]
    Failed,
    /// Being processed.
    #[serde(rename = "processing")]
    Processing,
    /// Waiting to be processed.
    #[serde(rename = "pending")]
    Pending,
    /// Value not known to this client.
    #[serde(other)]
    Unknown,
}

/// Acknowledgement of an accepted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAccepted {
    /// Document identifier.
    #[serde(default)]
    pub document_id: Option<String>,
    /// Processing status.
    #[serde(default)]
    pub status: Option<DocumentProcessingStatus>,
    /// Notices raised when the document was accepted.
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Status of an ingested document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatus {
    /// Document identifier.
    pub document_id: String,
    /// Configuration used to process the document.
    #[serde(default)]
    pub configuration_id: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// Processing status.
    #[serde(default)]
    pub status: Option<DocumentProcessingStatus>,
    /// Description of the status.
    #[serde(default)]
    pub status_description: Option<String>,
    /// Original file name.
    #[serde(default)]
    pub filename: Option<String>,
    /// Detected file type.
    #[serde(default)]
    pub file_type: Option<String>,
    /// SHA-1 of the document.
    #[serde(default)]
    pub sha1: Option<String>,
    /// Notices raised during processing.
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Response from deleting a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    /// Identifier of the deleted document.
    #[serde(default)]
    pub document_id: Option<String>,
    /// Deletion status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Options for `add_document`.
#[derive(Debug, Clone)]
pub struct AddDocumentOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Document content.
    pub file: Option<FileUpload>,
    /// Document metadata, as a JSON document.
    pub metadata: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl AddDocumentOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            file: None,
            metadata: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the document content.
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

/// Options for `update_document`.
#[derive(Debug, Clone)]
pub struct UpdateDocumentOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Document identifier.
    pub document_id: String,
    /// New document content.
    pub file: Option<FileUpload>,
    /// New metadata, as a JSON document.
    pub metadata: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateDocumentOptions {
    /// Creates options for the given document.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            document_id: document_id.into(),
            file: None,
            metadata: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the document content.
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

/// Options for `get_document_status` and `delete_document`.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Environment identifier.
    pub environment_id: String,
    /// Collection identifier.
    pub collection_id: String,
    /// Document identifier.
    pub document_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DocumentOptions {
    /// Creates options for the given document.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            document_id: document_id.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a custom request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Builds the `file` and `metadata` parts of a document upload.
///
/// At least one of the two must be present.
pub(crate) fn document_parts(
    file: Option<FileUpload>,
    metadata: Option<String>,
) -> DiscoveryResult<Vec<MultipartPart>> {
    if file.is_none() && metadata.is_none() {
        return Err(DiscoveryError::validation(
            "file",
            "At least one of file or metadata must be supplied",
        ));
    }

    let mut parts = Vec::with_capacity(2);
    if let Some(file) = file {
        parts.push(file.into_part("file"));
    }
    if let Some(metadata) = metadata {
        parts.push(json_part("metadata", metadata));
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parts_require_file_or_metadata() {
        let err = document_parts(None, None).unwrap_err();
        assert!(matches!(err, DiscoveryError::Validation { .. }));
    }

    #[test]
    fn test_parts_metadata_only() {
        let parts = document_parts(None, Some(r#"{"author":"me"}"#.to_string())).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name(), "metadata");
    }

    #[test]
    fn test_parts_file_then_metadata() {
        let parts = document_parts(
            Some(FileUpload::new(b"<html/>".to_vec(), "page.html").content_type("text/html")),
            Some("{}".to_string()),
        )
        .unwrap();
        let names: Vec<_> = parts.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["file", "metadata"]);
    }

    #[test]
    fn test_document_status_deserialization() {
        let json = r#"{
            "document_id": "f1360220-ea2d-4271-9d62-89a910b13c37",
            "configuration_id": "e8b9d793-b163-452a-9373-bce07efb510b",
            "created": "2016-06-16T10:56:54.957Z",
            "updated": "2017-05-16T13:56:54.957Z",
            "status": "available with notices",
            "status_description": "Document is successfully ingested but was indexed with warnings",
            "filename": "instructions.html",
            "file_type": "html",
            "sha1": "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3",
            "notices": [{"notice_id": "index_342", "severity": "warning", "step": "indexing"}]
        }"#;

        let status: DocumentStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, Some(DocumentProcessingStatus::AvailableWithNotices));
        assert_eq!(status.notices.len(), 1);
    }

    #[test]
    fn test_accepted_without_notices() {
        let accepted: DocumentAccepted =
            serde_json::from_str(r#"{"document_id":"doc1","status":"processing"}"#).unwrap();
        assert_eq!(accepted.status, Some(DocumentProcessingStatus::Processing));
        assert!(accepted.notices.is_empty());
    }
}
