use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Extract per-page text from a PDF on disk. The extractor separates pages
/// with form feeds; a document with none comes back as a single page.
/// Concatenation order is page order.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read PDF {}", path.display()))?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    let pages = split_pages(&text);
    info!("Extracted {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Join page texts into one block, pages separated by newlines.
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}

fn split_pages(text: &str) -> Vec<String> {
    if text.contains('\x0C') {
        text.split('\x0C').map(str::to_string).collect()
    } else {
        vec![text.to_string()]
    }
}
