use std::io::{Cursor, Read, Seek};

use anyhow::{Context, Result};
use zip::ZipArchive;

use super::ExtractError;

pub(crate) const PARSE_ERROR: &str =
    "Failed to parse DOCX file. Please ensure the file is valid.";

const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Decodes a DOCX (OOXML) byte stream into flattened plain text.
///
/// Formatting, images, and table structure are discarded; only the textual runs
/// survive, with a blank line between paragraphs.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    extract_inner(bytes).map_err(|e| {
        tracing::error!("DOCX parsing error: {e:#}");
        ExtractError::Parse(PARSE_ERROR.to_string())
    })
}

fn extract_inner(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("not a zip archive")?;

    let document_path = main_document_path(&mut archive)?;
    let mut xml = String::new();
    archive
        .by_name(&document_path)
        .with_context(|| format!("missing document part '{document_path}'"))?
        .read_to_string(&mut xml)
        .context("document part is not valid UTF-8")?;

    let doc = roxmltree::Document::parse(&xml).context("document part is not valid XML")?;

    let mut paragraphs = Vec::new();
    for paragraph in doc.descendants().filter(|n| n.has_tag_name("p")) {
        let mut text = String::new();
        for run_text in paragraph.descendants().filter(|n| n.has_tag_name("t")) {
            if let Some(t) = run_text.text() {
                text.push_str(t);
            }
        }
        paragraphs.push(text);
    }

    Ok(paragraphs.join("\n\n").trim().to_string())
}

/// Resolves the main document part (usually `word/document.xml`) from the
/// package-level relationships.
fn main_document_path<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String> {
    let mut rels = String::new();
    archive
        .by_name("_rels/.rels")
        .context("missing _rels/.rels")?
        .read_to_string(&mut rels)
        .context("relationships part is not valid UTF-8")?;

    let doc = roxmltree::Document::parse(&rels).context("relationships part is not valid XML")?;
    let target = doc
        .descendants()
        .find(|n| n.attribute("Type") == Some(OFFICE_DOCUMENT_REL))
        .and_then(|n| n.attribute("Target"))
        .context("no officeDocument relationship in package")?;

    Ok(target.trim_start_matches('/').to_string())
}

/// Builds a minimal in-memory DOCX package, one run per paragraph.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = zip::ZipWriter::new(&mut cursor);
    let options = zip::write::FileOptions::default();
    writer.start_file("_rels/.rels", options).unwrap();
    writer.write_all(RELS.as_bytes()).unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap();
    drop(writer);
    cursor.into_inner()
}
