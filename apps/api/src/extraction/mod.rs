//! Resume text extraction — classify the upload, decode it, bound the work.

pub mod docx;
pub mod pdf;

use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A resume file as received from the upload form. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type declared by the client; may be empty or wrong, hence the
    /// extension fallback in [`classify`].
    pub declared_type: String,
    pub bytes: Bytes,
}

/// Typed extraction failure. `Ok` text is always defined (possibly empty);
/// failures never carry text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type. Please upload a PDF or DOCX file.")]
    Unsupported,

    #[error("{0}")]
    Parse(String),

    #[error("Resume extraction timed out. Please try again.")]
    Timeout,
}

/// Supported resume formats. `Unknown` is an explicit variant so dispatch is a
/// closed match instead of a fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Unknown,
}

/// Classifies an upload from its declared MIME type, falling back to the file
/// extension. Checked in order; first match wins.
pub fn classify(declared_type: &str, file_name: &str) -> FileKind {
    let file_name = file_name.to_lowercase();
    if declared_type == PDF_MIME || file_name.ends_with(".pdf") {
        FileKind::Pdf
    } else if declared_type == DOCX_MIME || file_name.ends_with(".docx") {
        FileKind::Docx
    } else {
        FileKind::Unknown
    }
}

/// Extracts plain text from an uploaded resume.
///
/// Both decoders are CPU-bound and run on a blocking task; the whole call is
/// bounded by `timeout`. A panic inside a decoder surfaces as a parse failure
/// for that format, never as a crashed request.
pub async fn extract(
    bytes: Bytes,
    declared_type: &str,
    file_name: &str,
    timeout: Duration,
) -> Result<String, ExtractError> {
    let kind = classify(declared_type, file_name);
    let decode: fn(&[u8]) -> Result<String, ExtractError> = match kind {
        FileKind::Pdf => pdf::extract_text,
        FileKind::Docx => docx::extract_text,
        FileKind::Unknown => return Err(ExtractError::Unsupported),
    };

    let task = tokio::task::spawn_blocking(move || decode(&bytes));
    match tokio::time::timeout(timeout, task).await {
        Err(_) => Err(ExtractError::Timeout),
        Ok(Err(join_err)) => {
            tracing::error!("Extraction task aborted: {join_err}");
            Err(ExtractError::Parse(match kind {
                FileKind::Pdf => pdf::DECODE_ERROR.to_string(),
                _ => docx::PARSE_ERROR.to_string(),
            }))
        }
        Ok(Ok(result)) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn test_classify_pdf_by_mime() {
        assert_eq!(classify(PDF_MIME, "resume.bin"), FileKind::Pdf);
    }

    #[test]
    fn test_classify_pdf_by_extension() {
        assert_eq!(classify("application/octet-stream", "Resume.PDF"), FileKind::Pdf);
    }

    #[test]
    fn test_classify_docx_by_mime() {
        assert_eq!(classify(DOCX_MIME, "resume.bin"), FileKind::Docx);
    }

    #[test]
    fn test_classify_docx_by_extension() {
        assert_eq!(classify("", "resume.docx"), FileKind::Docx);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("text/plain", "resume.txt"), FileKind::Unknown);
    }

    #[test]
    fn test_classify_pdf_wins_over_docx_extension() {
        // Dispatch order: the PDF check runs first.
        assert_eq!(classify(PDF_MIME, "resume.docx"), FileKind::Pdf);
    }

    #[tokio::test]
    async fn test_extract_rejects_unknown_kind() {
        let result = extract(Bytes::from_static(b"plain text"), "text/plain", "a.txt", TIMEOUT).await;
        assert!(matches!(result, Err(ExtractError::Unsupported)));
    }

    #[tokio::test]
    async fn test_extract_docx_end_to_end() {
        let bytes = Bytes::from(docx::docx_fixture(&["Hello world"]));
        let text = extract(bytes, DOCX_MIME, "resume.docx", TIMEOUT).await.unwrap();
        assert_eq!(text, "Hello world");
    }

    #[tokio::test]
    async fn test_extract_twice_is_identical() {
        let bytes = Bytes::from(docx::docx_fixture(&["Rust engineer", "Tokio services"]));
        let first = extract(bytes.clone(), DOCX_MIME, "resume.docx", TIMEOUT).await.unwrap();
        let second = extract(bytes, DOCX_MIME, "resume.docx", TIMEOUT).await.unwrap();
        assert_eq!(first, second);
    }

    // Paused-clock runtime: the timer fires while the decoder is still on the
    // blocking pool, so the timeout path is taken deterministically.
    #[tokio::test(start_paused = true)]
    async fn test_extract_times_out() {
        let paragraphs: Vec<String> = (0..5000).map(|i| format!("paragraph number {i}")).collect();
        let refs: Vec<&str> = paragraphs.iter().map(String::as_str).collect();
        let bytes = Bytes::from(docx::docx_fixture(&refs));
        let result = extract(bytes, DOCX_MIME, "resume.docx", Duration::from_secs(5)).await;
        assert!(matches!(result, Err(ExtractError::Timeout)));
    }
}
