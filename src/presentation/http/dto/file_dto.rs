use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub status: String,
    pub timestamp: f64,
    pub file_path: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponseDto {
    pub status: String,
    pub api: String,
}
