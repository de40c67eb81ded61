use anyhow::{Context, Result};
use tracing::info;

/// Fetch a URL and return the response body as text. Any non-success status
/// is an error; callers never proceed past a failed fetch.
pub async fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::Client::new();

    info!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status from {}", url))?;

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read body from {}", url))?;
    Ok(body)
}
