use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::chunker::{self, rules, Chunk};
use crate::{output, pdf};

pub struct Config {
    pub path: PathBuf,
    pub source_label: String,
    pub output: PathBuf,
}

/// Extract success criteria from a local WCAG PDF.
pub fn run(config: &Config) -> Result<Vec<Chunk>> {
    let pages = pdf::extract_pages(&config.path)?;
    let text = pdf::join_pages(&pages);

    let chunks = chunker::chunk_by_headings(&text, &rules::WCAG_PDF, &config.source_label);
    info!("Matched {} success criteria", chunks.len());

    output::write_chunks(&config.output, &chunks)?;
    Ok(chunks)
}

// ── Tests ──
