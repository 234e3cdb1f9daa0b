use std::sync::Arc;

use crate::application::ports::vector_store::ScoredText;
use crate::application::ports::{Reranker, VectorStore, Vectorizer};
use crate::domain::value_objects::{IndexType, TenantKey};

#[derive(Debug)]
pub enum SearchError {
    VectorizationError(String),
    StoreError(String),
    RerankError(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::VectorizationError(msg) => write!(f, "Vectorization error: {}", msg),
            SearchError::StoreError(msg) => write!(f, "Store error: {}", msg),
            SearchError::RerankError(msg) => write!(f, "Rerank error: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

/// Query-time pipeline: vectorize the query, run a tenant-scoped similarity
/// search, optionally rerank.
///
/// The three steps are inherently sequential and share no mutable state
/// across requests. When reranking is requested the reranker's order and
/// scores replace the store's similarity scores entirely.
pub struct SearchService {
    vectorizer: Arc<dyn Vectorizer>,
    reranker: Arc<dyn Reranker>,
    vector_store: Arc<dyn VectorStore>,
}

impl SearchService {
    pub fn new(
        vectorizer: Arc<dyn Vectorizer>,
        reranker: Arc<dyn Reranker>,
        vector_store: Arc<dyn VectorStore>,
    ) -> Self {
        Self {
            vectorizer,
            reranker,
            vector_store,
        }
    }

    pub async fn search(
        &self,
        tenant: &TenantKey,
        collection_name: &str,
        index_type: IndexType,
        query: &str,
        limit: usize,
        rerank: bool,
    ) -> Result<Vec<ScoredText>, SearchError> {
        let query_vector = self
            .vectorizer
            .vectorize_query(query)
            .await
            .map_err(|e| SearchError::VectorizationError(e.to_string()))?;

        let hits = self
            .vector_store
            .search(tenant, collection_name, index_type, &query_vector, limit)
            .await
            .map_err(|e| SearchError::StoreError(e.to_string()))?;

        if !rerank {
            return Ok(hits);
        }

        let documents: Vec<String> = hits.iter().map(|hit| hit.text.clone()).collect();
        let reranked = self
            .reranker
            .rerank(query, &documents, limit)
            .await
            .map_err(|e| SearchError::RerankError(e.to_string()))?;

        Ok(reranked
            .into_iter()
            .map(|doc| ScoredText {
                score: doc.score,
                text: doc.text,
            })
            .collect())
    }
}
