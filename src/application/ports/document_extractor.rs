use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::DocumentMetadata;

#[derive(Debug)]
pub enum ExtractionError {
    IoError(String),
    CorruptedFile(String),
    ExtractionFailed(String),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::IoError(msg) => write!(f, "IO error: {}", msg),
            ExtractionError::CorruptedFile(msg) => write!(f, "Corrupted file: {}", msg),
            ExtractionError::ExtractionFailed(msg) => write!(f, "Extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}

/// Full text of one document plus its metadata, buffered in memory.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Produces page text and document metadata for a file on disk.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractionError>;
}
