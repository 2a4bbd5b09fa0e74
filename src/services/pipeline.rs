//! Two-level crawl traversal: root pages → tournament pages → image assets.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use scraper::{Html, Selector};
use tracing::info;
use url::Url;

use crate::cli::progress::Reporter;
use crate::config::Settings;
use crate::models::{DownloadOutcome, RunStats, TournamentRef};
use crate::scrapers::{links, region, Fetcher};
use crate::services::download::Downloader;

/// Drives the crawl: for each configured root page, discover the region and
/// its tournament links, then pull each tournament's eligible images into
/// the region's folder. Strictly sequential; one request in flight.
pub struct Pipeline {
    fetcher: Arc<dyn Fetcher>,
    downloader: Downloader,
    reporter: Reporter,
    root_urls: Vec<Url>,
    tournament_selector: Selector,
    image_selector: Selector,
    banner: String,
    output_root: PathBuf,
}

impl Pipeline {
    /// Build a pipeline from settings. Malformed root URLs or selectors are
    /// configuration errors and fail here, before any request is made.
    pub fn new(
        settings: &Settings,
        fetcher: Arc<dyn Fetcher>,
        reporter: Reporter,
    ) -> anyhow::Result<Self> {
        let root_urls = settings
            .root_urls
            .iter()
            .map(|raw| {
                Url::parse(raw).with_context(|| format!("invalid root URL {:?}", raw))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let tournament_selector = Selector::parse(&settings.tournament_selector).map_err(|e| {
            anyhow::anyhow!(
                "invalid tournament selector {:?}: {}",
                settings.tournament_selector,
                e
            )
        })?;
        let image_selector = Selector::parse(&settings.image_selector).map_err(|e| {
            anyhow::anyhow!("invalid image selector {:?}: {}", settings.image_selector, e)
        })?;

        let output_root = settings.output_root();
        Ok(Self {
            fetcher,
            downloader: Downloader::new(&output_root, &settings.asset_extension),
            reporter,
            root_urls,
            tournament_selector,
            image_selector,
            banner: settings.banner.clone(),
            output_root,
        })
    }

    /// Run the full crawl and return the aggregate counters.
    ///
    /// Per-unit failures (a root page, a tournament page, one asset) are
    /// counted and reported but never abort the run; only startup-level
    /// problems (output root not creatable) surface as errors.
    pub async fn run(&self) -> anyhow::Result<RunStats> {
        tokio::fs::create_dir_all(&self.output_root)
            .await
            .with_context(|| {
                format!("creating output root {}", self.output_root.display())
            })?;

        self.reporter.banner(&self.banner);

        let mut stats = RunStats::default();
        for root in &self.root_urls {
            let tournaments = self.scrape_root(root, &mut stats).await;
            let Some(first) = tournaments.first() else {
                continue;
            };

            self.reporter
                .region_header(&first.region, tournaments.len());

            for tournament in &tournaments {
                self.scrape_tournament(tournament, &mut stats).await;
            }
        }

        self.reporter.summary(&stats);
        self.reporter.complete();
        Ok(stats)
    }

    /// Fetch one root page and harvest its tournament references.
    ///
    /// Returns an empty list on fetch failure (counted, reported) or when
    /// the page simply has no tournament links.
    async fn scrape_root(&self, root: &Url, stats: &mut RunStats) -> Vec<TournamentRef> {
        let raw = match self.fetcher.fetch_text(root.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                stats.errors += 1;
                self.reporter.scrape_error(root.as_str(), &e.to_string());
                return Vec::new();
            }
        };

        let doc = Html::parse_document(&raw);
        let region = region::extract_region_name(&raw, &doc, &self.root_urls);

        let tournaments: Vec<TournamentRef> =
            links::harvest_links(&doc, &self.tournament_selector, root)
                .into_iter()
                .map(|url| TournamentRef {
                    url,
                    region: region.clone(),
                })
                .collect();

        stats.region_mut(&region).tournaments = tournaments.len() as u64;
        info!(
            region = %region,
            tournaments = tournaments.len(),
            "scraped root page"
        );
        tournaments
    }

    /// Fetch one tournament page and pull each image candidate in order.
    async fn scrape_tournament(&self, tournament: &TournamentRef, stats: &mut RunStats) {
        let raw = match self.fetcher.fetch_text(tournament.url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                stats.errors += 1;
                self.reporter.tournament_error(&e.to_string());
                return;
            }
        };

        let doc = Html::parse_document(&raw);
        for image in links::harvest_images(&doc, &self.image_selector, &tournament.url) {
            let outcome = self
                .downloader
                .download_asset(
                    self.fetcher.as_ref(),
                    &image.url,
                    &tournament.region,
                    &image.display_name,
                )
                .await;

            match &outcome {
                DownloadOutcome::Downloaded => self.reporter.downloaded(&image.display_name),
                DownloadOutcome::Failed(message) => {
                    self.reporter.download_error(&image.display_name, message)
                }
                _ => {}
            }
            stats.record(&tournament.region, &outcome);
        }
    }
}
