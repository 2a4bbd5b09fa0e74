//! Conditional fetch-and-store of image assets.
//!
//! The filesystem is the only persisted state: a file already present at
//! the derived path is the dedup key, and re-running the crawl skips it
//! without issuing a request.

use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::models::DownloadOutcome;
use crate::scrapers::Fetcher;
use crate::utils::names::normalize_file_name;

/// True when the URL ends with the downloadable extension, case-insensitive.
pub fn is_eligible_asset(url: &str, extension: &str) -> bool {
    url.to_lowercase().ends_with(&extension.to_lowercase())
}

/// Writes eligible assets under `<output_root>/<region folder>/`.
pub struct Downloader {
    output_root: PathBuf,
    extension: String,
}

impl Downloader {
    /// Create a downloader rooted at `output_root` for assets with the
    /// given dotted extension (e.g. `.png`).
    pub fn new(output_root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            output_root: output_root.into(),
            extension: extension.to_lowercase(),
        }
    }

    /// Target path for one asset: the normalized display name under the
    /// region folder, with the extension appended unless already present.
    fn target_path(&self, region_folder: &str, display_name: &str) -> PathBuf {
        let mut file_name = normalize_file_name(display_name);
        if !file_name.ends_with(&self.extension) {
            file_name.push_str(&self.extension);
        }
        self.output_root.join(region_folder).join(file_name)
    }

    /// Fetch one asset and persist it, classifying the result.
    ///
    /// Never returns an error: every failure folds into the outcome, and
    /// the caller observes only the classification. Decision points, in
    /// order: eligibility, directory creation, existence short-circuit,
    /// fetch, write.
    pub async fn download_asset(
        &self,
        fetcher: &dyn Fetcher,
        url: &Url,
        region_folder: &str,
        display_name: &str,
    ) -> DownloadOutcome {
        if !is_eligible_asset(url.as_str(), &self.extension) {
            return DownloadOutcome::SkippedNotEligible;
        }

        let path = self.target_path(region_folder, display_name);
        if let Some(parent) = path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                return DownloadOutcome::Failed(e.to_string());
            }
        }

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!("already on disk: {}", path.display());
            return DownloadOutcome::SkippedExisting;
        }

        let bytes = match fetcher.fetch_bytes(url.as_str()).await {
            Ok(bytes) => bytes,
            Err(e) => return DownloadOutcome::Failed(e.to_string()),
        };

        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => DownloadOutcome::Downloaded,
            Err(e) => DownloadOutcome::Failed(e.to_string()),
        }
    }
}
