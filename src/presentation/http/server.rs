use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::infrastructure::messaging::IngestionWorkerPool;
use crate::presentation::http::{
    handlers::{FileHandler, IngestHandler, SearchHandler},
    routes::{file_routes, health_routes, ingest_routes, search_routes},
};

pub struct HttpServer {
    file_handler: Arc<FileHandler>,
    ingest_handler: Arc<IngestHandler>,
    search_handler: Arc<SearchHandler>,
    worker_pool: Arc<IngestionWorkerPool>,
    port: u16,
}

impl HttpServer {
    pub fn new(
        file_handler: Arc<FileHandler>,
        ingest_handler: Arc<IngestHandler>,
        search_handler: Arc<SearchHandler>,
        worker_pool: Arc<IngestionWorkerPool>,
        port: Option<u16>,
    ) -> Self {
        Self {
            file_handler,
            ingest_handler,
            search_handler,
            worker_pool,
            port: port.unwrap_or(3000),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let worker_pool = self.worker_pool.clone();
        tokio::spawn(async move {
            worker_pool.start().await;
        });

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .merge(health_routes())
            .merge(file_routes(self.file_handler))
            .merge(ingest_routes(self.ingest_handler))
            .merge(search_routes(self.search_handler))
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(250 * 1024 * 1024)) // 250MB cap
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
