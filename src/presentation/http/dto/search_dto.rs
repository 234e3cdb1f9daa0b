use serde::{Deserialize, Serialize};

use crate::application::ports::vector_store::ScoredText;
use crate::domain::value_objects::IndexType;

#[derive(Debug, Deserialize)]
pub struct SearchRequestDto {
    pub client_id: String,
    pub project_id: String,
    pub collection_name: String,
    #[serde(default)]
    pub collection_index_type: IndexType,
    pub query: String,
    pub number_results: usize,
    #[serde(default)]
    pub rerank: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResultDto {
    pub score: f32,
    pub text: String,
}

impl From<ScoredText> for SearchResultDto {
    fn from(hit: ScoredText) -> Self {
        Self {
            score: hit.score,
            text: hit.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub timestamp: f64,
    pub search_time: f64,
    pub data: Vec<SearchResultDto>,
}
