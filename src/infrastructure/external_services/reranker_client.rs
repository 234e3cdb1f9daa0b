use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::application::ports::reranker::{RerankError, RerankedDocument, Reranker};

#[derive(Serialize)]
struct RerankRequest<'a> {
    query: &'a str,
    documents: &'a [String],
    top_k: usize,
}

#[derive(Deserialize)]
struct RerankResponse {
    #[serde(rename = "reranked-documents")]
    reranked_documents: Vec<RerankedDocument>,
}

#[derive(Debug, Clone)]
pub struct RerankerClientConfig {
    pub docs_uri: String,
    pub timeout_secs: u64,
}

impl Default for RerankerClientConfig {
    fn default() -> Self {
        let docs_uri = env::var("RERANK_DOCS_URI")
            .unwrap_or_else(|_| "http://localhost:8001/rerank/documents".to_string());

        Self {
            docs_uri,
            timeout_secs: 60,
        }
    }
}

/// HTTP client for the external cross-encoder reranking service.
#[derive(Debug, Clone)]
pub struct HttpReranker {
    client: Client,
    config: RerankerClientConfig,
}

impl HttpReranker {
    pub fn new(config: RerankerClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(RerankerClientConfig::default())
    }
}

#[async_trait]
impl Reranker for HttpReranker {
    async fn rerank(
        &self,
        query: &str,
        documents: &[String],
        top_k: usize,
    ) -> Result<Vec<RerankedDocument>, RerankError> {
        let response = self
            .client
            .post(&self.config.docs_uri)
            .json(&RerankRequest {
                query,
                documents,
                top_k,
            })
            .send()
            .await
            .map_err(|e| RerankError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RerankError::ApiError(format!(
                "rerank service returned {}",
                response.status()
            )));
        }

        let body: RerankResponse = response
            .json()
            .await
            .map_err(|e| RerankError::ApiError(e.to_string()))?;

        if body.reranked_documents.is_empty() && !documents.is_empty() {
            return Err(RerankError::EmptyResponse);
        }

        Ok(body.reranked_documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> HttpReranker {
        HttpReranker::new(RerankerClientConfig {
            docs_uri: server.url("/rerank/documents"),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_rerank_returns_scored_documents_in_service_order() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/rerank/documents")
                .json_body(json!({
                    "query": "indemnity",
                    "documents": ["a", "b"],
                    "top_k": 2
                }));
            then.status(200).json_body(json!({
                "reranked-documents": [
                    {"score": 7.1, "text": "b"},
                    {"score": 2.4, "text": "a"}
                ]
            }));
        });

        let documents = vec!["a".to_string(), "b".to_string()];
        let reranked = client(&server)
            .rerank("indemnity", &documents, 2)
            .await
            .unwrap();

        assert_eq!(reranked.len(), 2);
        assert_eq!(reranked[0].text, "b");
        assert_eq!(reranked[0].score, 7.1);
        assert_eq!(reranked[1].text, "a");
        mock.assert();
    }

    #[tokio::test]
    async fn test_empty_response_for_nonempty_input_is_an_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/rerank/documents");
            then.status(200).json_body(json!({"reranked-documents": []}));
        });

        let documents = vec!["a".to_string()];
        let result = client(&server).rerank("indemnity", &documents, 1).await;

        assert!(matches!(result, Err(RerankError::EmptyResponse)));
    }
}
