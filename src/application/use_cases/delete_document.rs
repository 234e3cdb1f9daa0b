use std::sync::Arc;

use crate::application::ports::VectorStore;
use crate::domain::value_objects::TenantKey;

#[derive(Debug)]
pub enum DeleteDocumentError {
    StoreError(String),
}

impl std::fmt::Display for DeleteDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteDocumentError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteDocumentError {}

#[derive(Debug, Clone)]
pub struct DeleteDocumentRequest {
    pub tenant: TenantKey,
    pub collection_name: String,
    pub file_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteDocumentResponse {
    pub delete_chunks: u64,
}

/// Removes every chunk of one uploaded file, scoped to the owning tenant.
pub struct DeleteDocumentUseCase {
    vector_store: Arc<dyn VectorStore>,
}

impl DeleteDocumentUseCase {
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    pub async fn execute(
        &self,
        request: DeleteDocumentRequest,
    ) -> Result<DeleteDocumentResponse, DeleteDocumentError> {
        let delete_chunks = self
            .vector_store
            .delete(&request.tenant, &request.collection_name, &request.file_id)
            .await
            .map_err(|e| DeleteDocumentError::StoreError(e.to_string()))?;

        tracing::info!(
            tenant = %request.tenant,
            collection = %request.collection_name,
            file_id = %request.file_id,
            delete_chunks,
            "deleted document chunks"
        );

        Ok(DeleteDocumentResponse { delete_chunks })
    }
}
