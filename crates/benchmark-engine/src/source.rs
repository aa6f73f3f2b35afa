//! Text-source collaborator seam.
//!
//! Turning an uploaded document into raw text is an external concern (PDF
//! and OCR backends live outside this crate). The pipeline fixes only the
//! contract: a source yields non-empty UTF-8 text or a typed error, with
//! "no text" distinct from "could not read".

use thiserror::Error;
use tracing::info;

/// Errors from a text source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The document was readable but contained no text at all.
    #[error("no text content found in document")]
    NoTextExtracted,

    /// The document could not be read.
    #[error("failed to read document: {0}")]
    Unreadable(String),
}

/// A document that can be turned into raw text.
pub trait TextSource {
    /// Yield the document's text. A readable but textless document is
    /// reported as [`SourceError::NoTextExtracted`], not as an empty
    /// string.
    fn extract_text(&self) -> Result<String, SourceError>;
}

/// Plain-text uploads: bytes pass through as UTF-8 (lossy), with only the
/// non-empty check applied.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    bytes: Vec<u8>,
}

impl PlainTextSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl TextSource for PlainTextSource {
    fn extract_text(&self) -> Result<String, SourceError> {
        let text = String::from_utf8_lossy(&self.bytes).into_owned();
        if text.trim().is_empty() {
            return Err(SourceError::NoTextExtracted);
        }
        Ok(text)
    }
}

/// Read a source and hold whatever it returns to the non-empty contract.
pub fn read_document(source: &impl TextSource) -> Result<String, SourceError> {
    let text = source.extract_text()?;
    if text.trim().is_empty() {
        return Err(SourceError::NoTextExtracted);
    }
    info!(chars = text.len(), "extracted document text");
    Ok(text)
}
