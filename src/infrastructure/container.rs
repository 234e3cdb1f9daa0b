use std::{path::PathBuf, sync::Arc};

use crate::{
    application::{
        ports::{DocumentExtractor, JobQueue, Reranker, VectorStore, Vectorizer},
        services::{IngestionService, SearchService},
        use_cases::{
            DeleteDocumentUseCase, GetIngestionStatusUseCase, QueueIngestionUseCase,
            SearchInformationUseCase,
        },
    },
    domain::repositories::JobRepository,
    infrastructure::{
        database::SqliteJobRepository,
        external_services::{HttpReranker, HttpVectorizer, PdfExtractor},
        file_system::LocalFileStorage,
        messaging::{IngestionWorkerPool, MpscJobQueue},
        vector_store::MilvusStore,
    },
    presentation::http::handlers::{FileHandler, IngestHandler, SearchHandler},
};

/// Builds and wires every component from environment configuration.
pub struct AppContainer {
    pub job_repository: Arc<dyn JobRepository>,
    pub vectorizer: Arc<dyn Vectorizer>,
    pub reranker: Arc<dyn Reranker>,
    pub vector_store: Arc<dyn VectorStore>,
    pub document_extractor: Arc<dyn DocumentExtractor>,
    pub job_queue: Arc<dyn JobQueue>,
    pub worker_pool: Arc<IngestionWorkerPool>,

    pub ingestion_service: Arc<IngestionService>,
    pub search_service: Arc<SearchService>,

    pub queue_ingestion_use_case: Arc<QueueIngestionUseCase>,
    pub get_ingestion_status_use_case: Arc<GetIngestionStatusUseCase>,
    pub delete_document_use_case: Arc<DeleteDocumentUseCase>,
    pub search_information_use_case: Arc<SearchInformationUseCase>,

    pub file_handler: Arc<FileHandler>,
    pub ingest_handler: Arc<IngestHandler>,
    pub search_handler: Arc<SearchHandler>,

    pub port: u16,
}

impl AppContainer {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let task_db_url = std::env::var("TASK_DB_URL")
            .unwrap_or_else(|_| "sqlite://tasks.db?mode=rwc".to_string());
        let job_repository: Arc<dyn JobRepository> =
            Arc::new(SqliteJobRepository::connect(&task_db_url).await?);

        let vectorizer: Arc<dyn Vectorizer> = Arc::new(HttpVectorizer::from_env()?);
        let reranker: Arc<dyn Reranker> = Arc::new(HttpReranker::from_env()?);
        let vector_store: Arc<dyn VectorStore> = Arc::new(MilvusStore::from_env()?);
        let document_extractor: Arc<dyn DocumentExtractor> = Arc::new(PdfExtractor::new());

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));
        let file_storage = Arc::new(LocalFileStorage::new(upload_dir));

        let ingestion_service = Arc::new(IngestionService::new(
            document_extractor.clone(),
            vectorizer.clone(),
            vector_store.clone(),
        ));
        let search_service = Arc::new(SearchService::new(
            vectorizer.clone(),
            reranker.clone(),
            vector_store.clone(),
        ));

        let (queue, receiver) = MpscJobQueue::create_pair();
        let job_queue: Arc<dyn JobQueue> = Arc::new(queue);

        let worker_count = std::env::var("WORKER_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);
        let worker_pool = Arc::new(IngestionWorkerPool::new(
            receiver,
            job_repository.clone(),
            ingestion_service.clone(),
            worker_count,
        ));

        let queue_ingestion_use_case = Arc::new(QueueIngestionUseCase::new(
            vector_store.clone(),
            job_repository.clone(),
            job_queue.clone(),
        ));
        let get_ingestion_status_use_case =
            Arc::new(GetIngestionStatusUseCase::new(job_repository.clone()));
        let delete_document_use_case =
            Arc::new(DeleteDocumentUseCase::new(vector_store.clone()));
        let search_information_use_case =
            Arc::new(SearchInformationUseCase::new(search_service.clone()));

        let file_handler = Arc::new(FileHandler::new(file_storage));
        let ingest_handler = Arc::new(IngestHandler::new(
            queue_ingestion_use_case.clone(),
            get_ingestion_status_use_case.clone(),
            delete_document_use_case.clone(),
        ));
        let search_handler = Arc::new(SearchHandler::new(search_information_use_case.clone()));

        let port = std::env::var("PORT").ok().and_then(|v| v.parse().ok());

        Ok(Self {
            job_repository,
            vectorizer,
            reranker,
            vector_store,
            document_extractor,
            job_queue,
            worker_pool,
            ingestion_service,
            search_service,
            queue_ingestion_use_case,
            get_ingestion_status_use_case,
            delete_document_use_case,
            search_information_use_case,
            file_handler,
            ingest_handler,
            search_handler,
            port: port.unwrap_or(3000),
        })
    }
}
