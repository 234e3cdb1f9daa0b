use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::search_information::SearchInformationError;
use crate::application::use_cases::{SearchInformationRequest, SearchInformationUseCase};
use crate::domain::value_objects::TenantKey;
use crate::presentation::http::dto::{
    ErrorResponseDto, SearchRequestDto, SearchResponseDto, SearchResultDto, epoch_secs,
};

pub struct SearchHandler {
    search_information: Arc<SearchInformationUseCase>,
}

impl SearchHandler {
    pub fn new(search_information: Arc<SearchInformationUseCase>) -> Self {
        Self { search_information }
    }

    /// POST /search. Synchronous similarity search with optional rerank.
    pub async fn search(
        State(handler): State<Arc<SearchHandler>>,
        Json(body): Json<SearchRequestDto>,
    ) -> impl IntoResponse {
        let tenant = match TenantKey::checked(body.client_id, body.project_id) {
            Ok(tenant) => tenant,
            Err(detail) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponseDto::new(detail)))
                    .into_response();
            }
        };

        let request = SearchInformationRequest {
            tenant,
            collection_name: body.collection_name,
            collection_index_type: body.collection_index_type,
            query: body.query,
            k: body.number_results,
            rerank: body.rerank,
        };

        match handler.search_information.execute(request).await {
            Ok(response) => (
                StatusCode::OK,
                Json(SearchResponseDto {
                    timestamp: epoch_secs(),
                    search_time: response.search_time,
                    data: response
                        .results
                        .into_iter()
                        .map(SearchResultDto::from)
                        .collect(),
                }),
            )
                .into_response(),
            Err(SearchInformationError::ValidationError(detail)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponseDto::new(detail))).into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponseDto::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
