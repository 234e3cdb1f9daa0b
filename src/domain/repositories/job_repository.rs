use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::IngestionJob;

#[derive(Debug)]
pub enum JobRepositoryError {
    ConnectionError(String),
    QueryError(String),
    SerializationError(String),
}

impl std::fmt::Display for JobRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobRepositoryError::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            JobRepositoryError::QueryError(msg) => write!(f, "Query error: {}", msg),
            JobRepositoryError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for JobRepositoryError {}

/// Durable store for ingestion job state, keyed by `task_id`.
///
/// An explicit instance is injected into both the submission path and the
/// poll path; there is deliberately no process-wide registry. Reads reflect
/// the last recorded state transition, nothing fresher.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &IngestionJob) -> Result<(), JobRepositoryError>;

    async fn update(&self, job: &IngestionJob) -> Result<(), JobRepositoryError>;

    async fn find_by_id(&self, task_id: Uuid) -> Result<Option<IngestionJob>, JobRepositoryError>;
}
