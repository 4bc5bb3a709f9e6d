//! HTTP client for the parse-resume endpoint — the UI-facing wrapper that
//! uploads a file and hands back the extraction outcome.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much of a non-JSON response body survives into the error message.
const BODY_SNIPPET_LEN: usize = 100;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server violated the JSON contract; the message carries the first
    /// [`BODY_SNIPPET_LEN`] characters of the raw body.
    #[error("Server returned non-JSON response: {0}...")]
    NonJson(String),

    #[error("Error parsing file: {0}")]
    Transport(String),
}

/// Result of a parse call. Mirrors the wire response; `success == false`
/// always comes with an error message for the caller to surface verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(default)]
    pub text: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "jobDescription", skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

impl From<ClientError> for ParseResult {
    fn from(err: ClientError) -> Self {
        ParseResult {
            text: String::new(),
            success: false,
            error: Some(err.to_string()),
            job_description: None,
        }
    }
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Uploads a resume for extraction. Never fails outright: transport
    /// failures and contract violations fold into a `success == false` result.
    pub async fn parse_file(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        job_description: Option<&str>,
    ) -> ParseResult {
        match self
            .try_parse_file(file_name, content_type, bytes, job_description)
            .await
        {
            Ok(result) => result,
            Err(err) => err.into(),
        }
    }

    async fn try_parse_file(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        job_description: Option<&str>,
    ) -> Result<ParseResult, ClientError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let mut form = Form::new().part("file", part);
        if let Some(jd) = job_description {
            form = form.text("jobDescription", jd.to_string());
        }

        let response = self
            .client
            .post(format!("{}/parse-resume", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::NonJson(truncate(&body, BODY_SNIPPET_LEN)));
        }

        let mut result: ParseResult = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() && result.error.is_none() {
            result.error = Some("Failed to parse file".to_string());
        }
        Ok(result)
    }
}

/// First `len` characters of a body, for error messages.
fn truncate(body: &str, len: usize) -> String {
    body.chars().take(len).collect()
}

/// Tracks which upload is current so stale extraction results can be discarded.
/// Latest wins; no cancellation signal reaches the server.
#[derive(Debug, Default)]
pub struct UploadTracker {
    generation: AtomicU64,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new upload and returns its token. Every earlier token
    /// becomes stale.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still identifies the latest upload.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Invalidates all outstanding tokens (file removed without replacement).
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Keeps `result` only if `token` is still current.
    pub fn accept(&self, token: u64, result: ParseResult) -> Option<ParseResult> {
        self.is_current(token).then_some(result)
    }
}
