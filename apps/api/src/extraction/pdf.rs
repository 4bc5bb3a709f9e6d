use super::ExtractError;

pub(crate) const PARSE_ERROR: &str =
    "Failed to parse PDF file. Please ensure the PDF is not corrupted.";
pub(crate) const DECODE_ERROR: &str = "Failed to extract text from PDF data.";

/// Decodes a PDF byte stream into plain text.
///
/// Text runs are concatenated across all pages in document order and the result
/// is trimmed. A valid PDF with no text runs decodes to an empty string, which
/// is a success, not a failure.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        tracing::error!("PDF parsing error: {e}");
        ExtractError::Parse(PARSE_ERROR.to_string())
    })?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest valid PDF: one page with an empty content stream. Object
    /// offsets in the xref table are computed while the body is assembled.
    fn empty_page_pdf() -> Vec<u8> {
        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>\nendobj\n",
            "4 0 obj\n<< /Length 0 >>\nstream\n\nendstream\nendobj\n",
        ];

        let mut buf: Vec<u8> = Vec::new();
        let mut offsets = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");
        for object in objects {
            offsets.push(buf.len());
            buf.extend_from_slice(object.as_bytes());
        }

        let xref_at = buf.len();
        buf.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
                offsets.len() + 1
            )
            .as_bytes(),
        );
        buf
    }

    #[test]
    fn test_zero_text_run_pdf_is_empty_success() {
        let text = extract_text(&empty_page_pdf()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_garbage_bytes_fail_with_parse_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert_eq!(err.to_string(), PARSE_ERROR);
    }

    #[test]
    fn test_extraction_has_no_hidden_state() {
        let bytes = empty_page_pdf();
        assert_eq!(extract_text(&bytes).unwrap(), extract_text(&bytes).unwrap());
    }
}
