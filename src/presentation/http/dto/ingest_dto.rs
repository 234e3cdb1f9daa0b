use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::IngestionRequest;
use crate::application::use_cases::DeleteDocumentRequest;
use crate::chunking::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATOR, SplitStrategy,
    default_recursive_separators,
};
use crate::domain::entities::FileIngestStatus;
use crate::domain::value_objects::{IndexType, TenantKey, is_filter_safe};

/// Separator field of an insert request: a single literal for the flat
/// splitters, a candidate list for the recursive one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeparatorValue {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct InsertRequestDto {
    pub client_id: String,
    pub project_id: String,
    pub collection_name: String,
    #[serde(default)]
    pub collection_index_type: IndexType,
    pub files_path: Vec<String>,
    #[serde(default = "default_separator_type")]
    pub separator_type: String,
    pub separator: Option<SeparatorValue>,
    pub chunk_size: Option<usize>,
    pub chunk_overlap: Option<usize>,
}

fn default_separator_type() -> String {
    "CharacterTextSplitter".to_string()
}

impl InsertRequestDto {
    /// Validates the request and lowers it to an `IngestionRequest`.
    /// Returns a caller-facing message on any shape violation.
    pub fn into_ingestion_request(self) -> Result<IngestionRequest, String> {
        for path in &self.files_path {
            if !path.to_lowercase().ends_with(".pdf") {
                return Err(format!("File '{}' is not a PDF.", path));
            }
        }
        if self.files_path.is_empty() {
            return Err("files_path must not be empty.".to_string());
        }

        let strategy = self.build_strategy()?;

        Ok(IngestionRequest {
            tenant: TenantKey::checked(self.client_id, self.project_id)?,
            collection_name: self.collection_name,
            collection_index_type: self.collection_index_type,
            files_path: self.files_path,
            strategy,
        })
    }

    fn build_strategy(&self) -> Result<SplitStrategy, String> {
        let chunk_size = self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE);
        let chunk_overlap = self.chunk_overlap.unwrap_or(DEFAULT_CHUNK_OVERLAP);

        match self.separator_type.as_str() {
            "SeparatorTextSplitter" => Ok(SplitStrategy::Separator {
                separator: self.single_separator()?,
            }),
            "CharacterTextSplitter" => {
                Self::check_chunk_bounds(chunk_size, chunk_overlap)?;
                Ok(SplitStrategy::Character {
                    separator: self.single_separator()?,
                    chunk_size,
                    chunk_overlap,
                })
            }
            "RecursiveCharacterTextSplitter" => {
                Self::check_chunk_bounds(chunk_size, chunk_overlap)?;
                Ok(SplitStrategy::RecursiveCharacter {
                    separators: self.separator_list()?,
                    chunk_size,
                    chunk_overlap,
                })
            }
            "LegalTextSplitter" => Ok(SplitStrategy::Legal),
            other => Err(format!("Unknown separator_type '{}'.", other)),
        }
    }

    fn single_separator(&self) -> Result<String, String> {
        match &self.separator {
            None => Ok(DEFAULT_SEPARATOR.to_string()),
            Some(SeparatorValue::One(s)) => Ok(s.clone()),
            Some(SeparatorValue::Many(_)) => Err(format!(
                "For '{}', 'separator' must be a string.",
                self.separator_type
            )),
        }
    }

    fn separator_list(&self) -> Result<Vec<String>, String> {
        match &self.separator {
            None => Ok(default_recursive_separators()),
            Some(SeparatorValue::Many(list)) => Ok(list.clone()),
            Some(SeparatorValue::One(_)) => Err(
                "For 'RecursiveCharacterTextSplitter', 'separator' must be a list of strings."
                    .to_string(),
            ),
        }
    }

    fn check_chunk_bounds(chunk_size: usize, chunk_overlap: usize) -> Result<(), String> {
        if chunk_size <= chunk_overlap {
            return Err("'chunk_size' must be greater than 'chunk_overlap'.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct InsertResponseDto {
    pub task_id: Uuid,
    pub status: String,
    pub timestamp: f64,
}

#[derive(Debug, Serialize)]
pub struct InsertStatusResponseDto {
    pub task_id: Uuid,
    pub status: String,
    pub timestamp: f64,
    pub data: Vec<FileIngestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequestDto {
    pub client_id: String,
    pub project_id: String,
    pub collection_name: String,
    pub file_id: String,
}

impl DeleteRequestDto {
    /// Validates the request and lowers it to a `DeleteDocumentRequest`.
    pub fn into_delete_request(self) -> Result<DeleteDocumentRequest, String> {
        if !is_filter_safe(&self.file_id) {
            return Err("'file_id' must not contain quote or backslash characters.".to_string());
        }

        Ok(DeleteDocumentRequest {
            tenant: TenantKey::checked(self.client_id, self.project_id)?,
            collection_name: self.collection_name,
            file_id: self.file_id,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponseDto {
    pub delete_chunks: u64,
    pub timestamp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> InsertRequestDto {
        InsertRequestDto {
            client_id: "acme".to_string(),
            project_id: "contracts".to_string(),
            collection_name: "legal_docs".to_string(),
            collection_index_type: IndexType::IvfFlat,
            files_path: vec!["/uploads/report.pdf".to_string()],
            separator_type: "CharacterTextSplitter".to_string(),
            separator: None,
            chunk_size: None,
            chunk_overlap: None,
        }
    }

    #[test]
    fn test_defaults_fill_in_character_splitter() {
        let request = base_request().into_ingestion_request().unwrap();

        assert_eq!(
            request.strategy,
            SplitStrategy::Character {
                separator: "\n\n".to_string(),
                chunk_size: 512,
                chunk_overlap: 128,
            }
        );
    }

    #[test]
    fn test_non_pdf_path_is_rejected() {
        let mut dto = base_request();
        dto.files_path = vec!["/uploads/report.docx".to_string()];

        let err = dto.into_ingestion_request().unwrap_err();
        assert!(err.contains("not a PDF"));
    }

    #[test]
    fn test_pdf_extension_check_is_case_insensitive() {
        let mut dto = base_request();
        dto.files_path = vec!["/uploads/REPORT.PDF".to_string()];

        assert!(dto.into_ingestion_request().is_ok());
    }

    #[test]
    fn test_list_separator_rejected_for_character_splitter() {
        let mut dto = base_request();
        dto.separator = Some(SeparatorValue::Many(vec!["\n".to_string()]));

        let err = dto.into_ingestion_request().unwrap_err();
        assert!(err.contains("must be a string"));
    }

    #[test]
    fn test_string_separator_rejected_for_recursive_splitter() {
        let mut dto = base_request();
        dto.separator_type = "RecursiveCharacterTextSplitter".to_string();
        dto.separator = Some(SeparatorValue::One("\n".to_string()));

        let err = dto.into_ingestion_request().unwrap_err();
        assert!(err.contains("list of strings"));
    }

    #[test]
    fn test_chunk_size_not_above_overlap_is_rejected() {
        let mut dto = base_request();
        dto.chunk_size = Some(100);
        dto.chunk_overlap = Some(100);

        let err = dto.into_ingestion_request().unwrap_err();
        assert!(err.contains("chunk_size"));
    }

    #[test]
    fn test_untagged_separator_parses_both_shapes() {
        let one: SeparatorValue = serde_json::from_str("\"\\n\\n\"").unwrap();
        assert!(matches!(one, SeparatorValue::One(_)));

        let many: SeparatorValue = serde_json::from_str("[\"\\n\\n\", \"\\n\"]").unwrap();
        assert!(matches!(many, SeparatorValue::Many(_)));
    }

    #[test]
    fn test_legal_splitter_ignores_separator_config() {
        let mut dto = base_request();
        dto.separator_type = "LegalTextSplitter".to_string();
        dto.separator = Some(SeparatorValue::One("unused".to_string()));

        let request = dto.into_ingestion_request().unwrap();
        assert_eq!(request.strategy, SplitStrategy::Legal);
    }

    #[test]
    fn test_unknown_separator_type_is_rejected() {
        let mut dto = base_request();
        dto.separator_type = "SentenceSplitter".to_string();

        assert!(dto.into_ingestion_request().is_err());
    }

    #[test]
    fn test_quoted_client_id_is_rejected() {
        let mut dto = base_request();
        dto.client_id = "acme' || client_id != '".to_string();

        let err = dto.into_ingestion_request().unwrap_err();
        assert!(err.contains("client_id"));
    }

    #[test]
    fn test_delete_request_rejects_quoted_file_id() {
        let dto = DeleteRequestDto {
            client_id: "acme".to_string(),
            project_id: "contracts".to_string(),
            collection_name: "legal_docs".to_string(),
            file_id: "x' || file_id != '".to_string(),
        };

        let err = dto.into_delete_request().unwrap_err();
        assert!(err.contains("file_id"));
    }

    #[test]
    fn test_delete_request_lowers_plain_ids() {
        let dto = DeleteRequestDto {
            client_id: "acme".to_string(),
            project_id: "contracts".to_string(),
            collection_name: "legal_docs".to_string(),
            file_id: "report_ab12.pdf".to_string(),
        };

        let request = dto.into_delete_request().unwrap();
        assert_eq!(request.tenant, TenantKey::new("acme", "contracts"));
        assert_eq!(request.file_id, "report_ab12.pdf");
    }

    #[test]
    fn test_status_response_omits_error_when_absent() {
        let body = serde_json::to_value(InsertStatusResponseDto {
            task_id: Uuid::nil(),
            status: "SUCCESS".to_string(),
            timestamp: 0.0,
            data: Vec::new(),
            error: None,
        })
        .unwrap();

        assert!(body.get("error").is_none());

        let failed = serde_json::to_value(InsertStatusResponseDto {
            task_id: Uuid::nil(),
            status: "FAILURE".to_string(),
            timestamp: 0.0,
            data: Vec::new(),
            error: Some("extraction failed".to_string()),
        })
        .unwrap();

        assert_eq!(failed["error"], "extraction failed");
    }
}
