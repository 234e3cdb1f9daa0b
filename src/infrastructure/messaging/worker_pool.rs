use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::job_queue::QueuedIngestion;
use crate::application::services::IngestionService;
use crate::domain::entities::IngestionJob;
use crate::domain::repositories::JobRepository;
use crate::infrastructure::messaging::MpscJobReceiver;

/// Fixed pool of workers draining the ingestion queue.
///
/// Each worker owns one job at a time end to end: mark PROGRESS, run the
/// pipeline, record the terminal state. A worker failure is recorded on the
/// job, never propagated, so one bad document cannot take a worker down.
#[derive(Clone)]
pub struct IngestionWorkerPool {
    receiver: MpscJobReceiver,
    job_repository: Arc<dyn JobRepository>,
    ingestion_service: Arc<IngestionService>,
    worker_count: usize,
}

impl IngestionWorkerPool {
    pub fn new(
        receiver: MpscJobReceiver,
        job_repository: Arc<dyn JobRepository>,
        ingestion_service: Arc<IngestionService>,
        worker_count: usize,
    ) -> Self {
        Self {
            receiver,
            job_repository,
            ingestion_service,
            worker_count: worker_count.max(1),
        }
    }

    pub async fn start(&self) {
        tracing::info!(workers = self.worker_count, "starting ingestion workers");

        let mut handles = Vec::new();
        for worker_id in 0..self.worker_count {
            let worker = self.clone();
            handles.push(tokio::spawn(async move {
                worker.worker_loop(worker_id).await;
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "ingestion worker panicked");
            }
        }

        tracing::info!("ingestion workers stopped");
    }

    async fn worker_loop(&self, worker_id: usize) {
        while let Some(queued) = self.receiver.recv().await {
            tracing::info!(worker_id, task_id = %queued.task_id, "picked up ingestion job");
            self.process(queued).await;
        }
        tracing::info!(worker_id, "queue closed, worker exiting");
    }

    async fn process(&self, queued: QueuedIngestion) {
        let task_id = queued.task_id;

        let Some(mut job) = self.load_job(task_id).await else {
            tracing::error!(task_id = %task_id, "queued job has no stored record, dropping");
            return;
        };

        if let Err(e) = job.start() {
            tracing::error!(task_id = %task_id, error = %e, "job not startable");
            return;
        }
        self.store_job(&job).await;

        match self.ingestion_service.ingest(&queued.request).await {
            Ok(data) => {
                let chunks: i64 = data.iter().map(|status| status.chunks).sum();
                tracing::info!(task_id = %task_id, files = data.len(), chunks, "ingestion succeeded");
                if let Err(e) = job.succeed(data) {
                    tracing::error!(task_id = %task_id, error = %e, "invalid success transition");
                    return;
                }
            }
            Err(e) => {
                tracing::error!(task_id = %task_id, error = %e, "ingestion failed");
                if let Err(e) = job.fail(e.to_string()) {
                    tracing::error!(task_id = %task_id, error = %e, "invalid failure transition");
                    return;
                }
            }
        }
        self.store_job(&job).await;
    }

    async fn load_job(&self, task_id: Uuid) -> Option<IngestionJob> {
        match self.job_repository.find_by_id(task_id).await {
            Ok(job) => job,
            Err(e) => {
                tracing::error!(task_id = %task_id, error = %e, "failed to load job");
                None
            }
        }
    }

    async fn store_job(&self, job: &IngestionJob) {
        if let Err(e) = self.job_repository.update(job).await {
            tracing::error!(task_id = %job.task_id(), error = %e, "failed to persist job state");
        }
    }
}
