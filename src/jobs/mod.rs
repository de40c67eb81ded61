//! One-shot pipelines behind the CLI subcommands. Each takes an injected
//! `Config` and runs fetch/extract → chunk → write, returning the chunks it
//! persisted so the caller can summarize them.

pub mod criteria_html;
pub mod criteria_pdf;
pub mod page;
