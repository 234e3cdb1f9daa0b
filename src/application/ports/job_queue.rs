use async_trait::async_trait;
use uuid::Uuid;

use crate::application::services::ingestion_service::IngestionRequest;

#[derive(Debug)]
pub enum JobQueueError {
    QueueClosed,
}

impl std::fmt::Display for JobQueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobQueueError::QueueClosed => write!(f, "Job queue is closed"),
        }
    }
}

impl std::error::Error for JobQueueError {}

/// One ingestion submission handed to the worker pool. The `task_id` ties
/// the queued work back to its persisted job record.
#[derive(Debug, Clone)]
pub struct QueuedIngestion {
    pub task_id: Uuid,
    pub request: IngestionRequest,
}

/// Dispatches ingestion work to the background worker pool.
#[async_trait]
pub trait JobQueue: Send + Sync {
    async fn enqueue(&self, job: QueuedIngestion) -> Result<(), JobQueueError>;
}
