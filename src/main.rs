mod application;
mod chunking;
mod domain;
mod infrastructure;
mod presentation;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::infrastructure::AppContainer;
use crate::presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    let container = AppContainer::new().await?;

    let server = HttpServer::new(
        container.file_handler.clone(),
        container.ingest_handler.clone(),
        container.search_handler.clone(),
        container.worker_pool.clone(),
        Some(container.port),
    );

    server.run().await
}
