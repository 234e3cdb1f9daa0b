pub mod chunk_record;
pub mod document;
pub mod ingestion_job;

pub use chunk_record::ChunkRecord;
pub use document::DocumentMetadata;
pub use ingestion_job::{FileIngestStatus, IngestionJob};
