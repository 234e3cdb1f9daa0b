use async_trait::async_trait;

use crate::domain::entities::ChunkRecord;
use crate::domain::value_objects::{IndexType, TenantKey};

#[derive(Debug)]
pub enum VectorStoreError {
    ConnectivityError(String),
    /// Create on a collection that already exists. Surfaced separately so the
    /// benign first-creation race can be treated as success by callers.
    AlreadyExists(String),
    OperationError(String),
    ParseError(String),
}

impl std::fmt::Display for VectorStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorStoreError::ConnectivityError(msg) => {
                write!(f, "Vector store unreachable: {}", msg)
            }
            VectorStoreError::AlreadyExists(name) => {
                write!(f, "Collection already exists: {}", name)
            }
            VectorStoreError::OperationError(msg) => {
                write!(f, "Vector store operation failed: {}", msg)
            }
            VectorStoreError::ParseError(msg) => {
                write!(f, "Vector store response malformed: {}", msg)
            }
        }
    }
}

impl std::error::Error for VectorStoreError {}

/// One similarity-search hit: stored text plus its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredText {
    pub score: f32,
    pub text: String,
}

/// Gateway over the external vector database engine.
///
/// Every operation is a single scoped exchange with the engine, released on
/// all exit paths, and none of them retry internally. Reads and deletes
/// always conjoin the tenant key with any other predicate.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn exists(&self, collection_name: &str) -> Result<bool, VectorStoreError>;

    /// Not idempotent: creating an existing collection fails with
    /// `AlreadyExists`. Callers probe `exists` first.
    async fn create(
        &self,
        collection_name: &str,
        index_type: IndexType,
    ) -> Result<(), VectorStoreError>;

    async fn insert(
        &self,
        collection_name: &str,
        rows: &[ChunkRecord],
    ) -> Result<u64, VectorStoreError>;

    /// Removes every row matching the tenant key and `file_id`; a `file_id`
    /// matching nothing returns 0, not an error.
    async fn delete(
        &self,
        tenant: &TenantKey,
        collection_name: &str,
        file_id: &str,
    ) -> Result<u64, VectorStoreError>;

    async fn search(
        &self,
        tenant: &TenantKey,
        collection_name: &str,
        index_type: IndexType,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredText>, VectorStoreError>;
}
