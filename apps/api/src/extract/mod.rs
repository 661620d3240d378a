//! File Text Extractor — turns an uploaded resume into plain text.
//!
//! PDFs are read page by page; everything else is decoded as UTF-8.

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[cfg(test)]
pub(crate) mod fixtures;
pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read PDF: {0}")]
    Parse(String),

    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Declared kind of an upload. Only `application/pdf` selects the PDF path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Text,
}

impl MediaKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|s| s.trim().to_ascii_lowercase());

        match essence.as_deref() {
            Some("application/pdf") => MediaKind::Pdf,
            _ => MediaKind::Text,
        }
    }
}

/// A single uploaded resume. Lives for one request.
#[derive(Debug, Clone)]
pub struct UploadedArtifact {
    pub kind: MediaKind,
    pub bytes: Bytes,
    pub file_name: Option<String>,
}

impl UploadedArtifact {
    pub fn new(kind: MediaKind, bytes: impl Into<Bytes>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

pub fn extract_text(artifact: &UploadedArtifact) -> Result<String, ExtractError> {
    let text = match artifact.kind {
        MediaKind::Pdf => pdf::extract_pdf_text(&artifact.bytes)?,
        MediaKind::Text => decode_text(&artifact.bytes)?,
    };

    info!(
        "Extracted {} chars from {:?} upload ({} bytes, {})",
        text.chars().count(),
        artifact.kind,
        artifact.bytes.len(),
        artifact.file_name.as_deref().unwrap_or("unnamed")
    );

    Ok(text)
}

/// Decodes bytes as UTF-8 verbatim.
pub fn decode_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(std::str::from_utf8(bytes)?.to_owned())
}

/// True when nothing worth sending to the model was extracted.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
