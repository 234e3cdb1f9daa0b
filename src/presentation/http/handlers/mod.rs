pub mod file_handler;
pub mod ingest_handler;
pub mod search_handler;

pub use file_handler::FileHandler;
pub use ingest_handler::IngestHandler;
pub use search_handler::SearchHandler;
