pub mod delete_document;
pub mod get_ingestion_status;
pub mod queue_ingestion;
pub mod search_information;

pub use delete_document::{DeleteDocumentRequest, DeleteDocumentUseCase};
pub use get_ingestion_status::GetIngestionStatusUseCase;
pub use queue_ingestion::QueueIngestionUseCase;
pub use search_information::{SearchInformationRequest, SearchInformationUseCase};
