use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_cases::{
    DeleteDocumentUseCase, GetIngestionStatusUseCase, QueueIngestionUseCase,
};
use crate::presentation::http::dto::{
    DeleteRequestDto, DeleteResponseDto, ErrorResponseDto, InsertRequestDto, InsertResponseDto,
    InsertStatusResponseDto, epoch_secs,
};

/// Handlers for the asynchronous ingestion surface: submit, poll, delete.
///
/// Validation problems come back as 400 with a caller-facing detail; every
/// other failure is a generic 500 with the detail kept in logs.
pub struct IngestHandler {
    queue_ingestion: Arc<QueueIngestionUseCase>,
    get_status: Arc<GetIngestionStatusUseCase>,
    delete_document: Arc<DeleteDocumentUseCase>,
}

impl IngestHandler {
    pub fn new(
        queue_ingestion: Arc<QueueIngestionUseCase>,
        get_status: Arc<GetIngestionStatusUseCase>,
        delete_document: Arc<DeleteDocumentUseCase>,
    ) -> Self {
        Self {
            queue_ingestion,
            get_status,
            delete_document,
        }
    }

    /// POST /insert. Returns the task id immediately; the work itself runs
    /// on the background workers.
    pub async fn insert(
        State(handler): State<Arc<IngestHandler>>,
        Json(body): Json<InsertRequestDto>,
    ) -> impl IntoResponse {
        let request = match body.into_ingestion_request() {
            Ok(request) => request,
            Err(detail) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponseDto::new(detail)))
                    .into_response();
            }
        };

        match handler.queue_ingestion.execute(request).await {
            Ok(response) => (
                StatusCode::OK,
                Json(InsertResponseDto {
                    task_id: response.task_id,
                    status: response.status,
                    timestamp: epoch_secs(),
                }),
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to queue ingestion");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponseDto::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }

    /// GET /insert/status/{task_id}.
    pub async fn status(
        State(handler): State<Arc<IngestHandler>>,
        Path(task_id): Path<Uuid>,
    ) -> impl IntoResponse {
        match handler.get_status.execute(task_id).await {
            Ok(status) => (
                StatusCode::OK,
                Json(InsertStatusResponseDto {
                    task_id: status.task_id,
                    status: status.status,
                    timestamp: epoch_secs(),
                    data: status.data,
                    error: status.error,
                }),
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, task_id = %task_id, "status lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponseDto::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }

    /// POST /delete. Removes every chunk of one file for one tenant.
    pub async fn delete(
        State(handler): State<Arc<IngestHandler>>,
        Json(body): Json<DeleteRequestDto>,
    ) -> impl IntoResponse {
        let request = match body.into_delete_request() {
            Ok(request) => request,
            Err(detail) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponseDto::new(detail)))
                    .into_response();
            }
        };

        match handler.delete_document.execute(request).await {
            Ok(response) => (
                StatusCode::OK,
                Json(DeleteResponseDto {
                    delete_chunks: response.delete_chunks,
                    timestamp: epoch_secs(),
                }),
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "delete failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponseDto::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
