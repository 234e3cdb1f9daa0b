use std::sync::Arc;

use crate::application::ports::vector_store::ScoredText;
use crate::application::services::{SearchError, SearchService};
use crate::domain::value_objects::{IndexType, TenantKey};

#[derive(Debug)]
pub enum SearchInformationError {
    ValidationError(String),
    SearchError(String),
}

impl std::fmt::Display for SearchInformationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchInformationError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
            SearchInformationError::SearchError(msg) => write!(f, "Search error: {}", msg),
        }
    }
}

impl std::error::Error for SearchInformationError {}

impl From<SearchError> for SearchInformationError {
    fn from(error: SearchError) -> Self {
        SearchInformationError::SearchError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SearchInformationRequest {
    pub tenant: TenantKey,
    pub collection_name: String,
    pub collection_index_type: IndexType,
    pub query: String,
    pub k: usize,
    pub rerank: bool,
}

#[derive(Debug, Clone)]
pub struct SearchInformationResponse {
    pub results: Vec<ScoredText>,
    pub search_time: f64,
}

pub struct SearchInformationUseCase {
    search_service: Arc<SearchService>,
}

impl SearchInformationUseCase {
    pub fn new(search_service: Arc<SearchService>) -> Self {
        Self { search_service }
    }

    pub async fn execute(
        &self,
        request: SearchInformationRequest,
    ) -> Result<SearchInformationResponse, SearchInformationError> {
        if request.query.trim().is_empty() {
            return Err(SearchInformationError::ValidationError(
                "Query cannot be empty".to_string(),
            ));
        }
        if request.k == 0 {
            return Err(SearchInformationError::ValidationError(
                "k must be at least 1".to_string(),
            ));
        }

        let start_time = std::time::Instant::now();

        let results = self
            .search_service
            .search(
                &request.tenant,
                &request.collection_name,
                request.collection_index_type,
                &request.query,
                request.k,
                request.rerank,
            )
            .await?;

        Ok(SearchInformationResponse {
            results,
            search_time: start_time.elapsed().as_secs_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::reranker::{RerankError, RerankedDocument};
    use crate::application::ports::vector_store::VectorStoreError;
    use crate::application::ports::vectorizer::VectorizerError;
    use crate::application::ports::{Reranker, VectorStore, Vectorizer};
    use crate::domain::entities::ChunkRecord;

    struct FakeVectorizer;

    #[async_trait]
    impl Vectorizer for FakeVectorizer {
        async fn vectorize_documents(
            &self,
            texts: &[String],
        ) -> Result<Vec<Vec<f32>>, VectorizerError> {
            Ok(texts.iter().map(|_| vec![0.5]).collect())
        }

        async fn vectorize_query(&self, _text: &str) -> Result<Vec<f32>, VectorizerError> {
            Ok(vec![0.5])
        }
    }

    struct FakeReranker;

    #[async_trait]
    impl Reranker for FakeReranker {
        async fn rerank(
            &self,
            _query: &str,
            _documents: &[String],
            _top_k: usize,
        ) -> Result<Vec<RerankedDocument>, RerankError> {
            Ok(vec![])
        }
    }

    struct FakeStore;

    #[async_trait]
    impl VectorStore for FakeStore {
        async fn exists(&self, _collection_name: &str) -> Result<bool, VectorStoreError> {
            Ok(true)
        }

        async fn create(
            &self,
            _collection_name: &str,
            _index_type: IndexType,
        ) -> Result<(), VectorStoreError> {
            Ok(())
        }

        async fn insert(
            &self,
            _collection_name: &str,
            rows: &[ChunkRecord],
        ) -> Result<u64, VectorStoreError> {
            Ok(rows.len() as u64)
        }

        async fn delete(
            &self,
            _tenant: &TenantKey,
            _collection_name: &str,
            _file_id: &str,
        ) -> Result<u64, VectorStoreError> {
            Ok(0)
        }

        async fn search(
            &self,
            _tenant: &TenantKey,
            _collection_name: &str,
            _index_type: IndexType,
            _query_vector: &[f32],
            _limit: usize,
        ) -> Result<Vec<ScoredText>, VectorStoreError> {
            Ok(vec![ScoredText {
                score: 0.8,
                text: "hit".to_string(),
            }])
        }
    }

    fn use_case() -> SearchInformationUseCase {
        SearchInformationUseCase::new(Arc::new(SearchService::new(
            Arc::new(FakeVectorizer),
            Arc::new(FakeReranker),
            Arc::new(FakeStore),
        )))
    }

    fn request(query: &str, k: usize) -> SearchInformationRequest {
        SearchInformationRequest {
            tenant: TenantKey::new("acme", "contracts"),
            collection_name: "legal_docs".to_string(),
            collection_index_type: IndexType::IvfFlat,
            query: query.to_string(),
            k,
            rerank: false,
        }
    }

    #[tokio::test]
    async fn test_returns_hits_and_measures_search_time() {
        let response = use_case().execute(request("force majeure", 5)).await.unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].text, "hit");
        assert!(response.search_time >= 0.0);
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let result = use_case().execute(request("   ", 5)).await;
        assert!(matches!(
            result,
            Err(SearchInformationError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_k_is_rejected() {
        let result = use_case().execute(request("force majeure", 0)).await;
        assert!(matches!(
            result,
            Err(SearchInformationError::ValidationError(_))
        ));
    }
}
