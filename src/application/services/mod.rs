pub mod ingestion_service;
pub mod search_service;

pub use ingestion_service::{IngestionError, IngestionRequest, IngestionService};
pub use search_service::{SearchError, SearchService};
