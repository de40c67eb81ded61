mod chunker;
mod fetch;
mod html;
mod jobs;
mod output;
mod pdf;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "a11y_scraper",
    about = "Accessibility standards scraper producing search-index chunks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape WCAG success criteria from the HTML Recommendation
    Criteria {
        #[arg(long, default_value = "https://www.w3.org/TR/WCAG22/")]
        url: String,
        /// Output JSON file
        #[arg(short, long, default_value = "wcag22_html_chunks.json")]
        out: PathBuf,
    },
    /// Extract success criteria from a local WCAG PDF
    Pdf {
        /// Path to the PDF
        #[arg(default_value = "wcag22.pdf")]
        path: PathBuf,
        /// Source label recorded on each chunk
        #[arg(long, default_value = "WCAG 2.2 PDF")]
        label: String,
        /// Output JSON file
        #[arg(short, long, default_value = "wcag22_pdf_chunks.json")]
        out: PathBuf,
    },
    /// Chunk a page's structural elements one-to-one
    Page {
        #[arg(long, default_value = "https://www.access-board.gov/ict/")]
        url: String,
        /// Chunk id prefix
        #[arg(long, default_value = "access-board-ict")]
        prefix: String,
        /// Output JSON file
        #[arg(short, long, default_value = "508_ict_chunks.json")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Criteria { url, out } => {
            let config = jobs::criteria_html::Config { url, output: out };
            let chunks = jobs::criteria_html::run(&config).await?;
            println!("Extracted {} success criteria chunks.", chunks.len());

            // Quick sanity check on the first few criteria
            for c in chunks.iter().take(5) {
                println!(
                    "{} {} [Level {}]",
                    c.id,
                    c.title.as_deref().unwrap_or(""),
                    c.level.as_deref().unwrap_or("-"),
                );
                println!("{} ...\n", truncate(&c.text, 200));
            }
        }
        Commands::Pdf { path, label, out } => {
            let config = jobs::criteria_pdf::Config {
                path,
                source_label: label,
                output: out,
            };
            let chunks = jobs::criteria_pdf::run(&config)?;
            println!(
                "Extracted {} chunks from {}",
                chunks.len(),
                config.source_label
            );
        }
        Commands::Page { url, prefix, out } => {
            let config = jobs::page::Config {
                url,
                id_prefix: prefix,
                output: out,
            };
            let chunks = jobs::page::run(&config).await?;
            println!("Extracted {} chunks.", chunks.len());
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
