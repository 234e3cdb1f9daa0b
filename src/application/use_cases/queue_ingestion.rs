use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::vector_store::VectorStoreError;
use crate::application::ports::{JobQueue, QueuedIngestion, VectorStore, job_queue::JobQueueError};
use crate::application::services::IngestionRequest;
use crate::domain::entities::IngestionJob;
use crate::domain::repositories::{JobRepository, job_repository::JobRepositoryError};

#[derive(Debug)]
pub enum QueueIngestionError {
    StoreError(String),
    RepositoryError(String),
    QueueError(String),
}

impl std::fmt::Display for QueueIngestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueIngestionError::StoreError(msg) => write!(f, "Store error: {}", msg),
            QueueIngestionError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            QueueIngestionError::QueueError(msg) => write!(f, "Queue error: {}", msg),
        }
    }
}

impl std::error::Error for QueueIngestionError {}

impl From<JobRepositoryError> for QueueIngestionError {
    fn from(error: JobRepositoryError) -> Self {
        QueueIngestionError::RepositoryError(error.to_string())
    }
}

impl From<JobQueueError> for QueueIngestionError {
    fn from(error: JobQueueError) -> Self {
        QueueIngestionError::QueueError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct QueueIngestionResponse {
    pub task_id: Uuid,
    pub status: String,
}

/// Accepts an ingestion request, makes sure the target collection exists,
/// records a pending job, and hands the work to the background queue.
pub struct QueueIngestionUseCase {
    vector_store: Arc<dyn VectorStore>,
    job_repository: Arc<dyn JobRepository>,
    job_queue: Arc<dyn JobQueue>,
}

impl QueueIngestionUseCase {
    pub fn new(
        vector_store: Arc<dyn VectorStore>,
        job_repository: Arc<dyn JobRepository>,
        job_queue: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            vector_store,
            job_repository,
            job_queue,
        }
    }

    pub async fn execute(
        &self,
        request: IngestionRequest,
    ) -> Result<QueueIngestionResponse, QueueIngestionError> {
        self.ensure_collection(&request).await?;

        let job = IngestionJob::new();
        self.job_repository.create(&job).await?;

        self.job_queue
            .enqueue(QueuedIngestion {
                task_id: job.task_id(),
                request,
            })
            .await?;

        Ok(QueueIngestionResponse {
            task_id: job.task_id(),
            status: job.state().as_str().to_string(),
        })
    }

    async fn ensure_collection(&self, request: &IngestionRequest) -> Result<(), QueueIngestionError> {
        let exists = self
            .vector_store
            .exists(&request.collection_name)
            .await
            .map_err(|e| QueueIngestionError::StoreError(e.to_string()))?;

        if exists {
            return Ok(());
        }

        match self
            .vector_store
            .create(&request.collection_name, request.collection_index_type)
            .await
        {
            Ok(()) => Ok(()),
            // Another request created it between the existence check and here.
            Err(VectorStoreError::AlreadyExists(_)) => Ok(()),
            Err(e) => Err(QueueIngestionError::StoreError(e.to_string())),
        }
    }
}
