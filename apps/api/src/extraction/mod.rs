//! Text extraction: turns an uploaded resume into plain text.
//!
//! `AppState` carries an `Arc<dyn TextExtractor>`; `DocumentTextExtractor`
//! handles PDF (via `pdf-extract`) and UTF-8 text.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {extension}. Please upload a PDF or TXT file.")]
    UnsupportedFormat { extension: String },

    #[error("Could not read {kind} file: {reason}")]
    Decode { kind: DocumentKind, reason: String },
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Classifies a file by the segment after its last '.', case-insensitively.
    /// A name without a dot is treated as an extension in its own right.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "txt" | "text" => Ok(DocumentKind::Text),
            _ => Err(ExtractionError::UnsupportedFormat { extension }),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Text => write!(f, "text"),
        }
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, data: Bytes) -> Result<String, ExtractionError>;
}

pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, kind: DocumentKind, data: Bytes) -> Result<String, ExtractionError> {
        match kind {
            DocumentKind::Text => decode_text(&data),
            // pdf-extract is CPU-bound and can panic on malformed input
            DocumentKind::Pdf => tokio::task::spawn_blocking(move || decode_pdf(&data))
                .await
                .map_err(|e| ExtractionError::Decode {
                    kind,
                    reason: format!("PDF parser aborted: {e}"),
                })?,
        }
    }
}

fn decode_text(data: &[u8]) -> Result<String, ExtractionError> {
    String::from_utf8(data.to_vec()).map_err(|e| ExtractionError::Decode {
        kind: DocumentKind::Text,
        reason: e.to_string(),
    })
}

fn decode_pdf(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractionError::Decode {
        kind: DocumentKind::Pdf,
        reason: e.to_string(),
    })
}
