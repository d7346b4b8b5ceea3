//! Document source: turns an uploaded file into plain text.
//!
//! Supports PDF (via pdf-extract, which concatenates page text) and plain
//! text. Anything else is rejected here, before the analysis core ever sees
//! it.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Extracts the text content of a résumé file.
pub fn extract_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path)
            .with_context(|| format!("failed to extract text from PDF '{}'", path.display()))?,
        "txt" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        other => bail!(
            "unsupported file type '{other}': please provide a PDF or plain-text resume"
        ),
    };

    debug!("extracted {} chars from '{}'", text.len(), path.display());
    Ok(text)
}
