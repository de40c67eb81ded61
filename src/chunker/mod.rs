pub mod rules;
pub mod split;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::html::PageElement;
use rules::HeadingRules;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One retrievable unit of text plus metadata, destined for a search index.
///
/// Field presence varies by pipeline: the heading pipelines fill `section` and
/// `title` (and `level` when a level rule is configured), the flat page
/// pipeline fills `kind` instead. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chunk {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub text: String,
    pub source: String,
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn clean(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Split `text` on heading boundaries and emit one chunk per (heading, body)
/// pair, in encounter order.
///
/// Headings the decompose pattern rejects are skipped without an error; their
/// body text is dropped with them. An empty body still yields a chunk.
pub fn chunk_by_headings(text: &str, rules: &HeadingRules, source: &str) -> Vec<Chunk> {
    let segments = split::split_segments(text, &rules.heading);
    let mut chunks = Vec::new();

    for (heading, body) in split::pair_segments(&segments) {
        let heading = clean(heading);
        let Some(caps) = rules.decompose.captures(&heading) else {
            continue;
        };
        let section = caps[1].to_string();
        let title = caps[2].to_string();

        let (level, body) = match &rules.level {
            Some(re) => (
                re.captures(body).map(|c| c[1].to_string()),
                re.replace_all(body, "").into_owned(),
            ),
            None => (None, body.to_string()),
        };

        chunks.push(Chunk {
            id: section.clone(),
            section: Some(section),
            title: Some(title),
            level,
            kind: None,
            text: clean(&body),
            source: source.to_string(),
        });
    }

    chunks
}

/// Emit one chunk per non-empty structural element, in document order.
///
/// Ids are `<prefix>-<n>` with `n` counting emitted chunks from zero, and each
/// chunk's `type` is the tag of the element it came from.
pub fn chunk_elements(elements: &[PageElement], id_prefix: &str, source: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for el in elements {
        let text = clean(&el.text);
        if text.is_empty() {
            continue;
        }
        chunks.push(Chunk {
            id: format!("{}-{}", id_prefix, chunks.len()),
            section: None,
            title: None,
            level: None,
            kind: Some(el.tag.clone()),
            text,
            source: source.to_string(),
        });
    }

    chunks
}

// ── Tests ──
