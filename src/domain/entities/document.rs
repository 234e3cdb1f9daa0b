use serde::{Deserialize, Serialize};

/// Metadata extracted from one source document.
///
/// Denormalized onto every chunk derived from the document so chunks are
/// filterable in a single table without joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub title: String,
    pub total_pages: i64,
    pub format: String,
}

impl DocumentMetadata {
    pub fn new(
        file_path: impl Into<String>,
        title: impl Into<String>,
        total_pages: i64,
        format: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            title: title.into(),
            total_pages,
            format: format.into(),
        }
    }
}
