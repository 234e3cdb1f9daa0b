pub mod document_extractor;
pub mod job_queue;
pub mod reranker;
pub mod vector_store;
pub mod vectorizer;

pub use document_extractor::DocumentExtractor;
pub use job_queue::{JobQueue, QueuedIngestion};
pub use reranker::Reranker;
pub use vector_store::VectorStore;
pub use vectorizer::Vectorizer;
