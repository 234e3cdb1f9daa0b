use serde::Serialize;

/// Error body for every failure response, FastAPI-style.
#[derive(Debug, Serialize)]
pub struct ErrorResponseDto {
    pub detail: String,
}

impl ErrorResponseDto {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Current time as fractional epoch seconds, the timestamp unit used by
/// every response body.
pub fn epoch_secs() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
