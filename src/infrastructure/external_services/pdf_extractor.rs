use async_trait::async_trait;
use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::application::ports::document_extractor::{
    DocumentExtractor, ExtractedDocument, ExtractionError,
};
use crate::domain::entities::DocumentMetadata;

/// Extracts text and metadata from PDF files with `lopdf`.
///
/// Parsing is CPU bound, so the whole load-and-extract runs on the blocking
/// pool rather than a worker task.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(path: &Path) -> Result<ExtractedDocument, ExtractionError> {
        if !path.exists() {
            return Err(ExtractionError::IoError(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let doc =
            Document::load(path).map_err(|e| ExtractionError::CorruptedFile(e.to_string()))?;

        let pages = doc.get_pages();
        let total_pages = pages.len() as i64;

        let mut page_texts = Vec::with_capacity(pages.len());
        for page_num in pages.keys() {
            let text = doc.extract_text(&[*page_num]).map_err(|e| {
                ExtractionError::ExtractionFailed(format!(
                    "failed to extract text from page {}: {}",
                    page_num, e
                ))
            })?;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                page_texts.push(trimmed.to_string());
            }
        }

        let text = page_texts.join("\n");

        let title = Self::info_string(&doc, b"Title").unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Ok(ExtractedDocument {
            text,
            metadata: DocumentMetadata {
                file_path: path.to_string_lossy().into_owned(),
                title,
                total_pages,
                format: "pdf".to_string(),
            },
        })
    }

    fn info_string(doc: &Document, key: &[u8]) -> Option<String> {
        let info = doc.trailer.get(b"Info").ok()?;
        let info = match info {
            lopdf::Object::Reference(id) => doc.get_object(*id).ok()?,
            other => other,
        };
        let value = info.as_dict().ok()?.get(key).ok()?.as_str().ok()?;
        let value = String::from_utf8_lossy(value).trim().to_string();
        if value.is_empty() { None } else { Some(value) }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractionError> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract_sync(&path))
            .await
            .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?
    }
}
