use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::presentation::http::dto::RootResponseDto;

pub fn health_routes() -> Router {
    Router::new().route("/", get(root_handler))
}

async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponseDto {
            status: "ok".to_string(),
            api: "information-retrieval".to_string(),
        }),
    )
}
