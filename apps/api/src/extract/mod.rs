//! Text-extraction collaborator: uploaded PDF bytes to plain text,
//! concatenated across all pages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not extract text from pdf: {0}")]
    Parse(#[from] pdf_extract::OutputError),
}

/// Extracts the concatenated plain text of every page.
///
/// CPU-bound; handlers call this inside `tokio::task::spawn_blocking`.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}
