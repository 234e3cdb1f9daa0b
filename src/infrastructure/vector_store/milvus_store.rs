use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use serde_json::{Value, json};
use std::env;
use std::time::Duration;

use crate::application::ports::vector_store::{ScoredText, VectorStore, VectorStoreError};
use crate::domain::entities::ChunkRecord;
use crate::domain::value_objects::{IndexType, TenantKey};

/// Embedding width produced by the vectorizer model.
pub const VECTOR_DIM: usize = 384;

const METRIC_TYPE: &str = "COSINE";

#[derive(Debug, Clone)]
pub struct MilvusConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MilvusConfig {
    fn default() -> Self {
        let base_url =
            env::var("MILVUS_URI").unwrap_or_else(|_| "http://localhost:19530".to_string());
        let token = env::var("MILVUS_TOKEN").ok().filter(|t| !t.is_empty());

        Self {
            base_url,
            token,
            timeout_secs: 30,
        }
    }
}

#[derive(Deserialize)]
struct ApiEnvelope<T> {
    code: i64,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Deserialize)]
struct HasData {
    has: bool,
}

#[derive(Deserialize)]
struct InsertData {
    #[serde(rename = "insertCount")]
    insert_count: u64,
}

#[derive(Deserialize)]
struct DeleteData {
    // Older server versions omit the count entirely.
    #[serde(rename = "deleteCount", default)]
    delete_count: u64,
}

#[derive(Deserialize)]
struct SearchHit {
    distance: f32,
    text: String,
}

/// Milvus gateway speaking the v2 `vectordb` REST dialect.
///
/// Each trait operation maps to exactly one HTTP exchange. Tenant scoping is
/// enforced here by conjoining `client_id` and `project_id` into every read
/// and delete filter.
#[derive(Debug, Clone)]
pub struct MilvusStore {
    client: Client,
    config: MilvusConfig,
}

impl MilvusStore {
    pub fn new(config: MilvusConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(MilvusConfig::default())
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &Value,
    ) -> Result<ApiEnvelope<T>, VectorStoreError> {
        let url = format!("{}/v2/vectordb/{}", self.config.base_url, endpoint);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VectorStoreError::ConnectivityError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VectorStoreError::OperationError(format!(
                "{} returned {}",
                endpoint,
                response.status()
            )));
        }

        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| VectorStoreError::ParseError(e.to_string()))
    }

    fn check<T>(envelope: &ApiEnvelope<T>, endpoint: &str) -> Result<(), VectorStoreError> {
        if envelope.code != 0 {
            return Err(VectorStoreError::OperationError(format!(
                "{} failed with code {}: {}",
                endpoint,
                envelope.code,
                envelope.message.as_deref().unwrap_or("no message")
            )));
        }
        Ok(())
    }

    fn tenant_filter(tenant: &TenantKey) -> String {
        format!(
            "client_id == '{}' && project_id == '{}'",
            tenant.client_id, tenant.project_id
        )
    }

    fn collection_schema() -> Value {
        json!({
            "autoId": true,
            "enabledDynamicField": false,
            "fields": [
                { "fieldName": "id", "dataType": "Int64", "isPrimary": true },
                {
                    "fieldName": "vector",
                    "dataType": "FloatVector",
                    "elementTypeParams": { "dim": VECTOR_DIM }
                },
                {
                    "fieldName": "text",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 65535 }
                },
                {
                    "fieldName": "client_id",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 256 }
                },
                {
                    "fieldName": "project_id",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 256 }
                },
                {
                    "fieldName": "file_id",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 512 }
                },
                {
                    "fieldName": "file_path",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 1024 }
                },
                {
                    "fieldName": "title",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 1024 }
                },
                { "fieldName": "total_pages", "dataType": "Int64" },
                {
                    "fieldName": "format",
                    "dataType": "VarChar",
                    "elementTypeParams": { "max_length": 64 }
                }
            ]
        })
    }
}

#[async_trait]
impl VectorStore for MilvusStore {
    async fn exists(&self, collection_name: &str) -> Result<bool, VectorStoreError> {
        let body = json!({ "collectionName": collection_name });
        let envelope: ApiEnvelope<HasData> = self.post("collections/has", &body).await?;
        Self::check(&envelope, "collections/has")?;

        envelope
            .data
            .map(|d| d.has)
            .ok_or_else(|| VectorStoreError::ParseError("collections/has had no data".to_string()))
    }

    async fn create(
        &self,
        collection_name: &str,
        index_type: IndexType,
    ) -> Result<(), VectorStoreError> {
        let body = json!({
            "collectionName": collection_name,
            "schema": Self::collection_schema(),
            "indexParams": [{
                "fieldName": "vector",
                "indexName": "vector_index",
                "metricType": METRIC_TYPE,
                "indexType": index_type.as_str(),
                "params": index_type.index_params(),
            }],
        });

        let envelope: ApiEnvelope<Value> = self.post("collections/create", &body).await?;
        if envelope.code != 0 {
            let message = envelope.message.as_deref().unwrap_or("no message");
            if message.contains("already exist") {
                return Err(VectorStoreError::AlreadyExists(collection_name.to_string()));
            }
            return Err(VectorStoreError::OperationError(format!(
                "collections/create failed with code {}: {}",
                envelope.code, message
            )));
        }

        // Collections must be loaded before they serve queries.
        let load_body = json!({ "collectionName": collection_name });
        let envelope: ApiEnvelope<Value> = self.post("collections/load", &load_body).await?;
        Self::check(&envelope, "collections/load")
    }

    async fn insert(
        &self,
        collection_name: &str,
        rows: &[ChunkRecord],
    ) -> Result<u64, VectorStoreError> {
        let data: Vec<Value> = rows
            .iter()
            .map(|row| {
                json!({
                    "vector": row.vector,
                    "text": row.text,
                    "client_id": row.tenant.client_id,
                    "project_id": row.tenant.project_id,
                    "file_id": row.file_id,
                    "file_path": row.metadata.file_path,
                    "title": row.metadata.title,
                    "total_pages": row.metadata.total_pages,
                    "format": row.metadata.format,
                })
            })
            .collect();

        let body = json!({ "collectionName": collection_name, "data": data });
        let envelope: ApiEnvelope<InsertData> = self.post("entities/insert", &body).await?;
        Self::check(&envelope, "entities/insert")?;

        envelope
            .data
            .map(|d| d.insert_count)
            .ok_or_else(|| VectorStoreError::ParseError("entities/insert had no data".to_string()))
    }

    async fn delete(
        &self,
        tenant: &TenantKey,
        collection_name: &str,
        file_id: &str,
    ) -> Result<u64, VectorStoreError> {
        let filter = format!(
            "{} && file_id == '{}'",
            Self::tenant_filter(tenant),
            file_id
        );
        let body = json!({ "collectionName": collection_name, "filter": filter });

        let envelope: ApiEnvelope<DeleteData> = self.post("entities/delete", &body).await?;
        Self::check(&envelope, "entities/delete")?;

        Ok(envelope.data.map(|d| d.delete_count).unwrap_or(0))
    }

    async fn search(
        &self,
        tenant: &TenantKey,
        collection_name: &str,
        index_type: IndexType,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredText>, VectorStoreError> {
        let body = json!({
            "collectionName": collection_name,
            "data": [query_vector],
            "filter": Self::tenant_filter(tenant),
            "limit": limit,
            "outputFields": ["text"],
            "searchParams": {
                "metricType": METRIC_TYPE,
                "params": index_type.search_params(),
            },
        });

        let envelope: ApiEnvelope<Vec<SearchHit>> = self.post("entities/search", &body).await?;
        Self::check(&envelope, "entities/search")?;

        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|hit| ScoredText {
                score: hit.distance,
                text: hit.text,
            })
            .collect())
    }
}
