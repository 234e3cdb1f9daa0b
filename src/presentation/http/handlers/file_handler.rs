use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::infrastructure::file_system::LocalFileStorage;
use crate::presentation::http::dto::{ErrorResponseDto, UploadResponseDto, epoch_secs};

pub struct FileHandler {
    storage: Arc<LocalFileStorage>,
}

impl FileHandler {
    pub fn new(storage: Arc<LocalFileStorage>) -> Self {
        Self { storage }
    }

    /// POST /upload. Accepts one PDF as multipart form data and saves it
    /// under a collision-free name for later insert requests.
    pub async fn upload(
        State(handler): State<Arc<FileHandler>>,
        mut multipart: Multipart,
    ) -> impl IntoResponse {
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponseDto::new(format!("Malformed multipart body: {}", e))),
                    )
                        .into_response();
                }
            };

            let Some(file_name) = field.file_name().map(str::to_string) else {
                continue;
            };

            if !file_name.to_lowercase().ends_with(".pdf") {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponseDto::new(format!(
                        "File '{}' is not a PDF.",
                        file_name
                    ))),
                )
                    .into_response();
            }

            let data = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponseDto::new(format!("Failed to read upload: {}", e))),
                    )
                        .into_response();
                }
            };

            match handler.storage.store(&file_name, &data).await {
                Ok(stored) => {
                    tracing::info!(file = %stored.stored_name, size = stored.size, "stored upload");
                    return (
                        StatusCode::OK,
                        Json(UploadResponseDto {
                            status: "SUCCESS".to_string(),
                            timestamp: epoch_secs(),
                            file_path: stored.path.to_string_lossy().into_owned(),
                        }),
                    )
                        .into_response();
                }
                Err(e) => {
                    tracing::error!(error = %e, file = %file_name, "upload write failed");
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponseDto::new("Internal server error")),
                    )
                        .into_response();
                }
            }
        }

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new("No file provided in the request")),
        )
            .into_response()
    }
}
