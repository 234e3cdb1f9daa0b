use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum RerankError {
    RequestError(String),
    ApiError(String),
    EmptyResponse,
}

impl std::fmt::Display for RerankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RerankError::RequestError(msg) => write!(f, "Request error: {}", msg),
            RerankError::ApiError(msg) => write!(f, "API error: {}", msg),
            RerankError::EmptyResponse => write!(f, "Reranker returned no documents"),
        }
    }
}

impl std::error::Error for RerankError {}

/// One document as ordered and scored by the reranking model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankedDocument {
    pub score: f32,
    pub text: String,
}

/// Second-stage relevance model: reorders candidate documents for a query
/// and assigns its own scores, replacing the similarity scores of the
/// first-stage search.
#[async_trait]
pub trait Reranker: Send + Sync {
    async fn rerank(
        &self,
        query: &str,
        documents: &[String],
        top_k: usize,
    ) -> Result<Vec<RerankedDocument>, RerankError>;
}
