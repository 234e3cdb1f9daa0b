use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{DocumentExtractor, VectorStore, Vectorizer};
use crate::chunking::SplitStrategy;
use crate::domain::entities::{ChunkRecord, FileIngestStatus};
use crate::domain::value_objects::{IndexType, TenantKey};

#[derive(Debug)]
pub enum IngestionError {
    ExtractionError(String),
    VectorizationError(String),
    StoreError(String),
}

impl std::fmt::Display for IngestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestionError::ExtractionError(msg) => write!(f, "Extraction error: {}", msg),
            IngestionError::VectorizationError(msg) => {
                write!(f, "Vectorization error: {}", msg)
            }
            IngestionError::StoreError(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for IngestionError {}

/// Everything one ingestion job needs: the tenant, the target collection and
/// the files to process with their chunking strategy.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    pub tenant: TenantKey,
    pub collection_name: String,
    pub collection_index_type: IndexType,
    pub files_path: Vec<String>,
    pub strategy: SplitStrategy,
}

/// Orchestrates one ingestion: extract -> chunk -> vectorize -> insert,
/// one file at a time.
///
/// Files are processed strictly sequentially; the first failing file aborts
/// the remaining ones, while files already inserted stay inserted (no
/// cross-file rollback). The target collection must exist before `ingest`
/// runs — creation is the submitter's concern.
pub struct IngestionService {
    extractor: Arc<dyn DocumentExtractor>,
    vectorizer: Arc<dyn Vectorizer>,
    vector_store: Arc<dyn VectorStore>,
}

impl IngestionService {
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        vectorizer: Arc<dyn Vectorizer>,
        vector_store: Arc<dyn VectorStore>,
    ) -> Self {
        Self {
            extractor,
            vectorizer,
            vector_store,
        }
    }

    pub async fn ingest(
        &self,
        request: &IngestionRequest,
    ) -> Result<Vec<FileIngestStatus>, IngestionError> {
        let mut statuses = Vec::new();

        for path in &request.files_path {
            let file_id = Uuid::new_v4().to_string();

            let extracted = self
                .extractor
                .extract(Path::new(path))
                .await
                .map_err(|e| IngestionError::ExtractionError(e.to_string()))?;

            let chunks = request.strategy.split(&extracted.text);

            // Vectors must exist for every chunk before anything is written;
            // a failed batch leaves this document entirely absent.
            let vectors = self
                .vectorizer
                .vectorize_documents(&chunks)
                .await
                .map_err(|e| IngestionError::VectorizationError(e.to_string()))?;

            let rows: Vec<ChunkRecord> = chunks
                .into_iter()
                .zip(vectors)
                .map(|(text, vector)| {
                    ChunkRecord::new(
                        vector,
                        text,
                        request.tenant.clone(),
                        file_id.clone(),
                        extracted.metadata.clone(),
                    )
                })
                .collect();

            if !rows.is_empty() {
                self.vector_store
                    .insert(&request.collection_name, &rows)
                    .await
                    .map_err(|e| IngestionError::StoreError(e.to_string()))?;
            }

            tracing::info!(
                tenant = %request.tenant,
                collection = %request.collection_name,
                file = %path,
                chunks = rows.len(),
                "File ingested"
            );

            statuses.push(FileIngestStatus {
                client_id: request.tenant.client_id.clone(),
                project_id: request.tenant.project_id.clone(),
                collection_name: request.collection_name.clone(),
                collection_index_type: request.collection_index_type,
                file_id,
                file: path.clone(),
                chunks: rows.len() as i64,
                separator_type: request.strategy.name().to_string(),
                status: "success".to_string(),
                timestamp: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
            });
        }

        Ok(statuses)
    }
}
