use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::application::ports::vectorizer::{Vectorizer, VectorizerError};

#[derive(Serialize)]
struct DocumentsRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct DocumentsResponse {
    vectors: Vec<Vec<f32>>,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    vector: Vec<Vec<f32>>,
}

#[derive(Debug, Clone)]
pub struct VectorizerClientConfig {
    pub docs_uri: String,
    pub query_uri: String,
    pub batch_size: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub timeout_secs: u64,
}

impl Default for VectorizerClientConfig {
    fn default() -> Self {
        let docs_uri = env::var("VECTOR_DOCS_URI")
            .unwrap_or_else(|_| "http://localhost:8001/vectorize/documents".to_string());
        let query_uri = env::var("VECTOR_QUERY_URI")
            .unwrap_or_else(|_| "http://localhost:8001/vectorize/query".to_string());

        Self {
            docs_uri,
            query_uri,
            batch_size: 10,
            max_retries: 3,
            retry_delay: Duration::from_secs(5),
            timeout_secs: 60,
        }
    }
}

/// HTTP client for the external embedding service.
///
/// Document texts are sent in fixed-size batches, sequentially. Each batch is
/// retried with a fixed delay; once a batch exhausts its retries the whole
/// call fails and no later batch is attempted.
#[derive(Debug, Clone)]
pub struct HttpVectorizer {
    client: Client,
    config: VectorizerClientConfig,
}

impl HttpVectorizer {
    pub fn new(config: VectorizerClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(VectorizerClientConfig::default())
    }

    async fn vectorize_batch(&self, batch: &[String]) -> Result<Vec<Vec<f32>>, VectorizerError> {
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.execute_batch(batch).await {
                Ok(vectors) => return Ok(vectors),
                Err(e) => {
                    if attempts >= self.config.max_retries {
                        return Err(VectorizerError::MaxRetriesExceeded(e.to_string()));
                    }

                    tracing::warn!(
                        attempt = attempts,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "embedding batch failed, retrying"
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }

    async fn execute_batch(&self, batch: &[String]) -> Result<Vec<Vec<f32>>, VectorizerError> {
        let response = self
            .client
            .post(&self.config.docs_uri)
            .json(&DocumentsRequest { texts: batch })
            .send()
            .await
            .map_err(|e| VectorizerError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VectorizerError::ApiError(format!(
                "embedding service returned {}",
                response.status()
            )));
        }

        let body: DocumentsResponse = response
            .json()
            .await
            .map_err(|e| VectorizerError::ApiError(e.to_string()))?;

        if body.vectors.len() != batch.len() {
            return Err(VectorizerError::ApiError(format!(
                "expected {} vectors, got {}",
                batch.len(),
                body.vectors.len()
            )));
        }

        Ok(body.vectors)
    }
}

#[async_trait]
impl Vectorizer for HttpVectorizer {
    async fn vectorize_documents(
        &self,
        texts: &[String],
    ) -> Result<Vec<Vec<f32>>, VectorizerError> {
        let mut vectors = Vec::with_capacity(texts.len());

        for batch in texts.chunks(self.config.batch_size) {
            vectors.extend(self.vectorize_batch(batch).await?);
        }

        Ok(vectors)
    }

    async fn vectorize_query(&self, text: &str) -> Result<Vec<f32>, VectorizerError> {
        let response = self
            .client
            .post(&self.config.query_uri)
            .json(&QueryRequest { text })
            .send()
            .await
            .map_err(|e| VectorizerError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VectorizerError::ApiError(format!(
                "embedding service returned {}",
                response.status()
            )));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| VectorizerError::ApiError(e.to_string()))?;

        body.vector
            .into_iter()
            .next()
            .ok_or(VectorizerError::EmptyResponse)
    }
}
