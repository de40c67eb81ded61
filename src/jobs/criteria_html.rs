use std::path::PathBuf;

use anyhow::Result;
use scraper::Html;
use tracing::info;

use crate::chunker::{self, rules, Chunk};
use crate::{fetch, html, output};

pub struct Config {
    pub url: String,
    pub output: PathBuf,
}

/// Scrape success criteria from the WCAG Recommendation HTML.
pub async fn run(config: &Config) -> Result<Vec<Chunk>> {
    let body = fetch::fetch_text(&config.url).await?;

    let chunks = {
        let doc = Html::parse_document(&body);
        let root = html::content_root(&doc);
        let text = html::flatten_text(root);
        chunker::chunk_by_headings(&text, &rules::WCAG_HTML, &config.url)
    };
    info!("Matched {} success criteria", chunks.len());

    output::write_chunks(&config.output, &chunks)?;
    Ok(chunks)
}

// ── Tests ──
