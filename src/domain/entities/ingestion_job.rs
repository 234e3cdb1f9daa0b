use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{IndexType, JobState};

/// Per-file status record carried by a successful ingestion job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileIngestStatus {
    pub client_id: String,
    pub project_id: String,
    pub collection_name: String,
    pub collection_index_type: IndexType,
    pub file_id: String,
    pub file: String,
    pub chunks: i64,
    pub separator_type: String,
    pub status: String,
    pub timestamp: f64,
}

/// One asynchronous ingestion execution, tracked by `task_id`.
///
/// State and terminal payload are persisted durably (see `JobRepository`) so
/// status stays pollable after the submitter disconnects or the process
/// restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionJob {
    task_id: Uuid,
    state: JobState,
    data: Vec<FileIngestStatus>,
    error: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IngestionJob {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            task_id: Uuid::new_v4(),
            state: JobState::Pending,
            data: Vec::new(),
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a job from its persisted representation.
    pub fn from_stored(
        task_id: Uuid,
        state: JobState,
        data: Vec<FileIngestStatus>,
        error: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            task_id,
            state,
            data,
            error,
            created_at,
            updated_at,
        }
    }

    pub fn task_id(&self) -> Uuid {
        self.task_id
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn data(&self) -> &[FileIngestStatus] {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn start(&mut self) -> Result<(), String> {
        self.transition(JobState::Progress)
    }

    pub fn succeed(&mut self, data: Vec<FileIngestStatus>) -> Result<(), String> {
        self.transition(JobState::Success)?;
        self.data = data;
        Ok(())
    }

    pub fn fail(&mut self, error: String) -> Result<(), String> {
        self.transition(JobState::Failure)?;
        self.error = Some(error);
        Ok(())
    }

    fn transition(&mut self, next: JobState) -> Result<(), String> {
        if !self.state.can_transition_to(next) {
            return Err(format!(
                "Invalid job transition: {} -> {}",
                self.state, next
            ));
        }
        self.state = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Default for IngestionJob {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> FileIngestStatus {
        FileIngestStatus {
            client_id: "client".to_string(),
            project_id: "project".to_string(),
            collection_name: "docs".to_string(),
            collection_index_type: IndexType::IvfFlat,
            file_id: Uuid::new_v4().to_string(),
            file: "docs/report.pdf".to_string(),
            chunks: 3,
            separator_type: "CharacterTextSplitter".to_string(),
            status: "success".to_string(),
            timestamp: 1730170211.22,
        }
    }

    #[test]
    fn test_success_path() {
        let mut job = IngestionJob::new();
        assert_eq!(job.state(), JobState::Pending);

        job.start().unwrap();
        assert_eq!(job.state(), JobState::Progress);

        job.succeed(vec![sample_status()]).unwrap();
        assert_eq!(job.state(), JobState::Success);
        assert_eq!(job.data().len(), 1);
        assert_eq!(job.data()[0].chunks, 3);
        assert!(job.error().is_none());
    }

    #[test]
    fn test_failure_path() {
        let mut job = IngestionJob::new();
        job.start().unwrap();
        job.fail("embedding service unreachable".to_string()).unwrap();

        assert_eq!(job.state(), JobState::Failure);
        assert_eq!(job.error(), Some("embedding service unreachable"));
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut job = IngestionJob::new();
        job.start().unwrap();
        job.succeed(Vec::new()).unwrap();

        assert!(job.start().is_err());
        assert!(job.fail("late".to_string()).is_err());
    }

    #[test]
    fn test_cannot_complete_before_start() {
        let mut job = IngestionJob::new();
        assert!(job.succeed(Vec::new()).is_err());
    }
}
