use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

#[derive(Debug)]
pub enum FileStorageError {
    IoError(String),
}

impl std::fmt::Display for FileStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStorageError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for FileStorageError {}

/// Saved upload: where the bytes landed and the name later requests use to
/// reference them.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub stored_name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Writes uploads into a flat directory, suffixing each name with a short
/// unique id so repeated uploads of the same file never collide.
pub struct LocalFileStorage {
    base_path: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn unique_name(file_name: &str) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        let suffix = &suffix[..8];

        match file_name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}_{}.{}", stem, suffix, ext),
            None => format!("{}_{}", file_name, suffix),
        }
    }

    pub async fn store(&self, file_name: &str, data: &[u8]) -> Result<StoredFile, FileStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| FileStorageError::IoError(e.to_string()))?;

        let stored_name = Self::unique_name(file_name);
        let path = self.base_path.join(&stored_name);

        fs::write(&path, data)
            .await
            .map_err(|e| FileStorageError::IoError(e.to_string()))?;

        Ok(StoredFile {
            stored_name,
            path,
            size: data.len() as u64,
        })
    }
}
