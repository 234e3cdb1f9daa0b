use serde::{Deserialize, Serialize};

use crate::domain::entities::DocumentMetadata;
use crate::domain::value_objects::TenantKey;

/// The atomic stored and retrieved unit: one text chunk with its embedding
/// vector and a denormalized copy of the owning document's metadata.
///
/// A record is only assembled once its vector has been computed, so a
/// document's chunks are never inserted with a partial set of vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub vector: Vec<f32>,
    pub text: String,
    pub tenant: TenantKey,
    pub file_id: String,
    pub metadata: DocumentMetadata,
}

impl ChunkRecord {
    pub fn new(
        vector: Vec<f32>,
        text: impl Into<String>,
        tenant: TenantKey,
        file_id: impl Into<String>,
        metadata: DocumentMetadata,
    ) -> Self {
        Self {
            vector,
            text: text.into(),
            tenant,
            file_id: file_id.into(),
            metadata,
        }
    }
}
