pub mod mpsc_job_queue;
pub mod worker_pool;

pub use mpsc_job_queue::{MpscJobQueue, MpscJobReceiver};
pub use worker_pool::IngestionWorkerPool;
