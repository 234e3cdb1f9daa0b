use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::IngestHandler;

pub fn ingest_routes(ingest_handler: Arc<IngestHandler>) -> Router {
    Router::new()
        .route("/insert", post(IngestHandler::insert))
        .route("/insert/status/{task_id}", get(IngestHandler::status))
        .route("/delete", post(IngestHandler::delete))
        .with_state(ingest_handler)
}
