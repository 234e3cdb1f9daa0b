use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::FileIngestStatus;
use crate::domain::repositories::{JobRepository, job_repository::JobRepositoryError};
use crate::domain::value_objects::JobState;

#[derive(Debug)]
pub enum GetIngestionStatusError {
    RepositoryError(String),
}

impl std::fmt::Display for GetIngestionStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetIngestionStatusError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GetIngestionStatusError {}

impl From<JobRepositoryError> for GetIngestionStatusError {
    fn from(error: JobRepositoryError) -> Self {
        GetIngestionStatusError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct IngestionStatusResponse {
    pub task_id: Uuid,
    pub status: String,
    pub data: Vec<FileIngestStatus>,
    pub error: Option<String>,
}

pub struct GetIngestionStatusUseCase {
    job_repository: Arc<dyn JobRepository>,
}

impl GetIngestionStatusUseCase {
    pub fn new(job_repository: Arc<dyn JobRepository>) -> Self {
        Self { job_repository }
    }

    /// A task id with no stored row polls as PENDING rather than erroring,
    /// so a client may poll immediately after submission without racing the
    /// job row becoming visible.
    pub async fn execute(
        &self,
        task_id: Uuid,
    ) -> Result<IngestionStatusResponse, GetIngestionStatusError> {
        match self.job_repository.find_by_id(task_id).await? {
            Some(job) => Ok(IngestionStatusResponse {
                task_id: job.task_id(),
                status: job.state().as_str().to_string(),
                data: job.data().to_vec(),
                error: job.error().map(str::to_string),
            }),
            None => Ok(IngestionStatusResponse {
                task_id,
                status: JobState::Pending.as_str().to_string(),
                data: Vec::new(),
                error: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::entities::IngestionJob;

    struct FakeJobRepository {
        jobs: Mutex<Vec<IngestionJob>>,
    }

    #[async_trait]
    impl JobRepository for FakeJobRepository {
        async fn create(&self, job: &IngestionJob) -> Result<(), JobRepositoryError> {
            self.jobs.lock().unwrap().push(job.clone());
            Ok(())
        }

        async fn update(&self, job: &IngestionJob) -> Result<(), JobRepositoryError> {
            let mut jobs = self.jobs.lock().unwrap();
            if let Some(slot) = jobs.iter_mut().find(|j| j.task_id() == job.task_id()) {
                *slot = job.clone();
            }
            Ok(())
        }

        async fn find_by_id(
            &self,
            task_id: Uuid,
        ) -> Result<Option<IngestionJob>, JobRepositoryError> {
            Ok(self
                .jobs
                .lock()
                .unwrap()
                .iter()
                .find(|j| j.task_id() == task_id)
                .cloned())
        }
    }

    #[tokio::test]
    async fn test_unknown_task_id_polls_as_pending() {
        let repo = Arc::new(FakeJobRepository {
            jobs: Mutex::new(vec![]),
        });
        let use_case = GetIngestionStatusUseCase::new(repo);

        let task_id = Uuid::new_v4();
        let response = use_case.execute(task_id).await.unwrap();

        assert_eq!(response.task_id, task_id);
        assert_eq!(response.status, "PENDING");
        assert!(response.data.is_empty());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_job_reports_failure_and_error() {
        let mut job = IngestionJob::new();
        job.start().unwrap();
        job.fail("embedding service unreachable".to_string()).unwrap();

        let repo = Arc::new(FakeJobRepository {
            jobs: Mutex::new(vec![job.clone()]),
        });
        let use_case = GetIngestionStatusUseCase::new(repo);

        let response = use_case.execute(job.task_id()).await.unwrap();

        assert_eq!(response.status, "FAILURE");
        assert_eq!(
            response.error.as_deref(),
            Some("embedding service unreachable")
        );
    }
}
