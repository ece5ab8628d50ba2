//! Documents service.
//!
//! Adding and updating documents uses multipart uploads with an optional
//! `file` part and an optional JSON `metadata` part; at least one of the two
//! must be supplied.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::DiscoveryResult;
use crate::transport::ApiRequest;
use crate::types::documents::{
    document_parts, AddDocumentOptions, DeleteDocumentResponse, DocumentAccepted,
    DocumentOptions, DocumentStatus, UpdateDocumentOptions,
};

const DOCUMENTS_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/documents";
const DOCUMENT_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}";

/// Documents service trait for testability.
#[async_trait]
pub trait DocumentsService: Send + Sync {
    /// Adds a document to a collection.
    async fn add_document(
        &self,
        options: AddDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>>;

    /// Gets the processing status of a document.
    async fn get_document_status(
        &self,
        options: DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentStatus>>;

    /// Replaces a document.
    async fn update_document(
        &self,
        options: UpdateDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>>;

    /// Deletes a document.
    async fn delete_document(
        &self,
        options: DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteDocumentResponse>>;
}

/// Implementation of the documents service.
pub struct DocumentsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl DocumentsServiceImpl {
    /// Creates a new documents service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl DocumentsService for DocumentsServiceImpl {
    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn add_document(
        &self,
        options: AddDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>> {
        let parts = document_parts(options.file, options.metadata)?;

        let request = ApiRequest::post(
            DOCUMENTS_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?
        .multipart(parts)
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(
            environment_id = %options.environment_id,
            collection_id = %options.collection_id,
            document_id = %options.document_id
        )
    )]
    async fn get_document_status(
        &self,
        options: DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentStatus>> {
        let request = ApiRequest::get(
            DOCUMENT_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
                ("document_id", options.document_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(
            environment_id = %options.environment_id,
            collection_id = %options.collection_id,
            document_id = %options.document_id
        )
    )]
    async fn update_document(
        &self,
        options: UpdateDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>> {
        let parts = document_parts(options.file, options.metadata)?;

        let request = ApiRequest::post(
            DOCUMENT_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
                ("document_id", options.document_id.as_str()),
            ],
        )?
        .multipart(parts)
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(
            environment_id = %options.environment_id,
            collection_id = %options.collection_id,
            document_id = %options.document_id
        )
    )]
    async fn delete_document(
        &self,
        options: DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteDocumentResponse>> {
        let request = ApiRequest::delete(
            DOCUMENT_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
                ("document_id", options.document_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }
}
