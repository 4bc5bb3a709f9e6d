use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire shape is the flat `{"success": false, "error": "..."}` envelope the
/// parse endpoint promises; callers surface the message verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file provided")]
    NoFile,

    #[error("Unsupported file type. Please upload a PDF or DOCX file.")]
    Unsupported,

    #[error("{0}")]
    Parse(String),

    #[error("Resume extraction timed out. Please try again.")]
    Timeout,

    #[error("Failed to read upload: {0}")]
    Multipart(String),

    #[error("Error parsing file: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Unsupported => AppError::Unsupported,
            ExtractError::Parse(message) => AppError::Parse(message),
            ExtractError::Timeout => AppError::Timeout,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoFile
            | AppError::Unsupported
            | AppError::Parse(_)
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout => {
                tracing::error!("Extraction timed out");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("File parsing error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
