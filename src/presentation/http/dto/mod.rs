pub mod file_dto;
pub mod ingest_dto;
pub mod response_dto;
pub mod search_dto;

pub use file_dto::{RootResponseDto, UploadResponseDto};
pub use ingest_dto::{
    DeleteRequestDto, DeleteResponseDto, InsertRequestDto, InsertResponseDto,
    InsertStatusResponseDto,
};
pub use response_dto::{ErrorResponseDto, epoch_secs};
pub use search_dto::{SearchRequestDto, SearchResponseDto, SearchResultDto};
