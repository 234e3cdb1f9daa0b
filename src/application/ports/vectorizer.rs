use async_trait::async_trait;

#[derive(Debug)]
pub enum VectorizerError {
    RequestError(String),
    ApiError(String),
    EmptyResponse,
    MaxRetriesExceeded(String),
}

impl std::fmt::Display for VectorizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorizerError::RequestError(msg) => write!(f, "Request error: {}", msg),
            VectorizerError::ApiError(msg) => write!(f, "API error: {}", msg),
            VectorizerError::EmptyResponse => write!(f, "Embedding service returned no vectors"),
            VectorizerError::MaxRetriesExceeded(msg) => {
                write!(f, "Max retries exceeded: {}", msg)
            }
        }
    }
}

impl std::error::Error for VectorizerError {}

/// Turns texts into fixed-dimension embedding vectors via the external
/// embedding service.
///
/// `vectorize_documents` returns one vector per input text, in input order;
/// it either succeeds for every text or fails as a whole — callers never see
/// partial results.
#[async_trait]
pub trait Vectorizer: Send + Sync {
    async fn vectorize_documents(&self, texts: &[String])
    -> Result<Vec<Vec<f32>>, VectorizerError>;

    async fn vectorize_query(&self, text: &str) -> Result<Vec<f32>, VectorizerError>;
}
