//! Handlers for the resume parsing endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{self, UploadedFile};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub success: bool,
    pub text: String,
    #[serde(rename = "jobDescription", skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

/// GET /parse-resume
/// Liveness probe for the parsing route.
pub async fn handle_parse_resume_status() -> Json<Value> {
    Json(json!({ "message": "API route is working" }))
}

/// POST /parse-resume
///
/// Multipart form: `file` (required) and `jobDescription` (optional). The job
/// description is echoed back so the client can keep its state in sync.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let name = field.file_name().unwrap_or("unknown").to_string();
                let declared_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                file = Some(UploadedFile {
                    name,
                    declared_type,
                    bytes,
                });
            }
            Some("jobDescription") => {
                job_description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Multipart(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let file = file.ok_or(AppError::NoFile)?;
    info!(
        "File received: {} ({}, {} bytes)",
        file.name,
        file.declared_type,
        file.bytes.len()
    );

    let text = extraction::extract(
        file.bytes.clone(),
        &file.declared_type,
        &file.name,
        state.config.extraction_timeout,
    )
    .await?;

    Ok(Json(ParseResponse {
        success: true,
        text,
        job_description,
    }))
}
