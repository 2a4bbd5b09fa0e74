//! Run the crawl pipeline.

use std::sync::Arc;

use tracing::debug;

use crate::cli::progress::Reporter;
use crate::config::Settings;
use crate::scrapers::HttpClient;
use crate::services::pipeline::Pipeline;

/// Crawl the configured root pages and download tournament logos.
pub async fn cmd_crawl(settings: &Settings) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let client = HttpClient::new(
        &settings.user_agent,
        settings.request_timeout(),
        settings.request_delay(),
    );

    let pipeline = Pipeline::new(settings, Arc::new(client), Reporter::new())?;
    let stats = pipeline.run().await?;

    // Existing-file skips stay out of the console summary but are still
    // observable here.
    debug!(
        downloaded = stats.downloaded,
        skipped_existing = stats.skipped_existing,
        regions = stats.regions.len(),
        "crawl finished"
    );
    Ok(())
}
