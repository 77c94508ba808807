//! Input Normalizer — converts user-provided resume/JD sources (pasted text
//! or an uploaded PDF/TXT file) into the single canonical `SourceDocument`
//! representation consumed by the analyzer.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const TEXT_MIME: &str = "text/plain";

/// A normalized resume or job description source.
///
/// Exactly one variant at a time; replacing a value discards the previous one
/// outright (no merge between text and file representations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceDocument {
    /// Raw pasted text, stored verbatim. Trimming applies only to the
    /// readiness check, never to the stored content.
    #[serde(rename = "text")]
    Text { content: String },

    /// An uploaded file, read fully into memory and base64-encoded.
    #[serde(rename = "file", rename_all = "camelCase")]
    File {
        content: String,
        mime_type: String,
        file_name: String,
    },
}

impl SourceDocument {
    pub fn text(content: impl Into<String>) -> Self {
        SourceDocument::Text {
            content: content.into(),
        }
    }

    /// Normalizes an uploaded file. Every upload entry point (multipart
    /// field, future drag-and-drop relay) converges here so validation and
    /// encoding behave identically.
    ///
    /// Accepts `application/pdf` / `text/plain` by declared MIME type, or a
    /// `.pdf` / `.txt` filename suffix. Anything else is rejected with
    /// `UnsupportedFileType` before the bytes are encoded.
    pub fn file(
        file_name: &str,
        declared_mime: Option<&str>,
        data: &[u8],
    ) -> Result<Self, AppError> {
        if !is_supported(file_name, declared_mime) {
            return Err(AppError::UnsupportedFileType(file_name.to_string()));
        }

        Ok(SourceDocument::File {
            content: BASE64.encode(data),
            mime_type: resolve_mime(file_name, declared_mime),
            file_name: file_name.to_string(),
        })
    }

    /// Whether this document may be submitted for a scan. File documents are
    /// always ready; text must be non-empty after trimming.
    pub fn is_ready(&self) -> bool {
        match self {
            SourceDocument::Text { content } => !content.trim().is_empty(),
            SourceDocument::File { .. } => true,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            SourceDocument::Text { .. } => None,
            SourceDocument::File { file_name, .. } => Some(file_name),
        }
    }
}

fn is_supported(file_name: &str, declared_mime: Option<&str>) -> bool {
    if declared_mime == Some(PDF_MIME) || declared_mime == Some(TEXT_MIME) {
        return true;
    }
    let name = file_name.to_ascii_lowercase();
    name.ends_with(".pdf") || name.ends_with(".txt")
}

/// The declared MIME type wins when non-empty; otherwise it is inferred from
/// the filename suffix, defaulting to `text/plain`.
fn resolve_mime(file_name: &str, declared_mime: Option<&str>) -> String {
    match declared_mime {
        Some(mime) if !mime.is_empty() => mime.to_string(),
        _ if file_name.to_ascii_lowercase().ends_with(".pdf") => PDF_MIME.to_string(),
        _ => TEXT_MIME.to_string(),
    }
}
