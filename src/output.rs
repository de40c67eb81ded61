use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::chunker::Chunk;

/// Write the full chunk sequence as a pretty-printed JSON array, replacing
/// any existing file at `path`.
pub fn write_chunks(path: &Path, chunks: &[Chunk]) -> Result<()> {
    let json = serde_json::to_string_pretty(chunks).context("Failed to serialize chunks")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} chunks to {}", chunks.len(), path.display());
    Ok(())
}
