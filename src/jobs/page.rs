use std::path::PathBuf;

use anyhow::Result;
use scraper::Html;
use tracing::info;

use crate::chunker::{self, Chunk};
use crate::{fetch, html, output};

pub struct Config {
    pub url: String,
    pub id_prefix: String,
    pub output: PathBuf,
}

/// Chunk a page's structural elements one-to-one.
pub async fn run(config: &Config) -> Result<Vec<Chunk>> {
    let body = fetch::fetch_text(&config.url).await?;

    let chunks = {
        let doc = Html::parse_document(&body);
        let root = html::content_root(&doc);
        let elements = html::structural_elements(root);
        chunker::chunk_elements(&elements, &config.id_prefix, &config.url)
    };
    info!("Kept {} of the page's structural elements", chunks.len());

    output::write_chunks(&config.output, &chunks)?;
    Ok(chunks)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_elements_become_sequential_chunks() {
        let body = std::fs::read_to_string("tests/fixtures/ict.html").unwrap();
        let doc = Html::parse_document(&body);
        let elements = html::structural_elements(html::content_root(&doc));
        let chunks =
            chunker::chunk_elements(&elements, "access-board-ict", "https://www.access-board.gov/ict/");

        assert!(chunks.len() <= elements.len());
        assert_eq!(chunks[0].id, "access-board-ict-0");
        assert_eq!(chunks[0].kind.as_deref(), Some("h1"));
        // Ids count emitted chunks; the fixture's empty paragraph leaves no gap.
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.id, format!("access-board-ict-{}", i));
            assert!(!c.text.is_empty());
        }
        // Each chunk keeps its own element's tag.
        assert!(chunks.iter().any(|c| c.kind.as_deref() == Some("li")));
    }
}
