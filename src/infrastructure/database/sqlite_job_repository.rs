use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use crate::domain::entities::{FileIngestStatus, IngestionJob};
use crate::domain::repositories::job_repository::{JobRepository, JobRepositoryError};
use crate::domain::value_objects::JobState;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS ingestion_jobs (
    task_id    TEXT PRIMARY KEY,
    state      TEXT NOT NULL,
    data_json  TEXT NOT NULL,
    error      TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// SQLite-backed job store.
///
/// One row per job, terminal payload serialized as JSON. A shared pool keeps
/// the submission path and the poll path on the same database file.
#[derive(Debug, Clone)]
pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    /// Connects and applies the schema. `database_url` follows sqlx
    /// conventions, e.g. `sqlite://tasks.db?mode=rwc` or `sqlite::memory:`.
    pub async fn connect(database_url: &str) -> Result<Self, JobRepositoryError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| JobRepositoryError::ConnectionError(e.to_string()))?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|e| JobRepositoryError::QueryError(e.to_string()))?;

        Ok(Self { pool })
    }

    fn row_to_job(row: SqliteRow) -> Result<IngestionJob, JobRepositoryError> {
        let task_id: String = row.get("task_id");
        let task_id = Uuid::parse_str(&task_id)
            .map_err(|e| JobRepositoryError::SerializationError(e.to_string()))?;

        let state: String = row.get("state");
        let state =
            JobState::from_str(&state).map_err(JobRepositoryError::SerializationError)?;

        let data_json: String = row.get("data_json");
        let data: Vec<FileIngestStatus> = serde_json::from_str(&data_json)
            .map_err(|e| JobRepositoryError::SerializationError(e.to_string()))?;

        let error: Option<String> = row.get("error");

        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");
        let created_at = Self::parse_timestamp(&created_at)?;
        let updated_at = Self::parse_timestamp(&updated_at)?;

        Ok(IngestionJob::from_stored(
            task_id, state, data, error, created_at, updated_at,
        ))
    }

    fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, JobRepositoryError> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| JobRepositoryError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn create(&self, job: &IngestionJob) -> Result<(), JobRepositoryError> {
        let data_json = serde_json::to_string(job.data())
            .map_err(|e| JobRepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            "INSERT INTO ingestion_jobs (task_id, state, data_json, error, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(job.task_id().to_string())
        .bind(job.state().as_str())
        .bind(data_json)
        .bind(job.error())
        .bind(job.created_at().to_rfc3339())
        .bind(job.updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| JobRepositoryError::QueryError(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, job: &IngestionJob) -> Result<(), JobRepositoryError> {
        let data_json = serde_json::to_string(job.data())
            .map_err(|e| JobRepositoryError::SerializationError(e.to_string()))?;

        sqlx::query(
            "UPDATE ingestion_jobs
             SET state = ?2, data_json = ?3, error = ?4, updated_at = ?5
             WHERE task_id = ?1",
        )
        .bind(job.task_id().to_string())
        .bind(job.state().as_str())
        .bind(data_json)
        .bind(job.error())
        .bind(job.updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| JobRepositoryError::QueryError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, task_id: Uuid) -> Result<Option<IngestionJob>, JobRepositoryError> {
        let row = sqlx::query(
            "SELECT task_id, state, data_json, error, created_at, updated_at
             FROM ingestion_jobs WHERE task_id = ?1",
        )
        .bind(task_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| JobRepositoryError::QueryError(e.to_string()))?;

        row.map(Self::row_to_job).transpose()
    }
}
