pub mod pdf_extractor;
pub mod reranker_client;
pub mod vectorizer_client;

pub use pdf_extractor::PdfExtractor;
pub use reranker_client::{HttpReranker, RerankerClientConfig};
pub use vectorizer_client::{HttpVectorizer, VectorizerClientConfig};
