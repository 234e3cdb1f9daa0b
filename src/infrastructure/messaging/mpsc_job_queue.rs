use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

use crate::application::ports::job_queue::{JobQueue, JobQueueError, QueuedIngestion};

/// In-process job queue over an unbounded tokio channel.
///
/// `create_pair` hands the sending half to the HTTP layer (as the `JobQueue`
/// port) and the receiving half to the worker pool. The receiver is behind a
/// mutex so several workers can compete for jobs.
pub struct MpscJobQueue {
    sender: mpsc::UnboundedSender<QueuedIngestion>,
}

pub struct MpscJobReceiver {
    receiver: Arc<Mutex<mpsc::UnboundedReceiver<QueuedIngestion>>>,
}

impl MpscJobQueue {
    pub fn create_pair() -> (Self, MpscJobReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (
            Self { sender },
            MpscJobReceiver {
                receiver: Arc::new(Mutex::new(receiver)),
            },
        )
    }
}

#[async_trait]
impl JobQueue for MpscJobQueue {
    async fn enqueue(&self, job: QueuedIngestion) -> Result<(), JobQueueError> {
        self.sender
            .send(job)
            .map_err(|_| JobQueueError::QueueClosed)
    }
}

impl MpscJobReceiver {
    /// Returns `None` once every sender is gone and the queue is drained.
    pub async fn recv(&self) -> Option<QueuedIngestion> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await
    }
}

impl Clone for MpscJobReceiver {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver.clone(),
        }
    }
}
