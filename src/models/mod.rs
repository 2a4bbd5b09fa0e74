//! Data models for a crawl run.

use std::collections::BTreeMap;

use url::Url;

/// An instruction to visit one tournament page, tagged with the region it
/// was discovered under. Created per root source, consumed exactly once by
/// the download phase, never persisted.
#[derive(Debug, Clone)]
pub struct TournamentRef {
    /// Absolute URL of the tournament page.
    pub url: Url,
    /// Sanitized region folder name.
    pub region: String,
}

/// An image link harvested from a tournament page: the resolved source URL
/// paired with the display name taken from the element's alt text.
#[derive(Debug, Clone)]
pub struct ImageCandidate {
    /// Absolute URL of the image asset.
    pub url: Url,
    /// Human-readable name, used for progress lines and filename derivation.
    pub display_name: String,
}

/// Classification of a single download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Asset fetched and written to disk.
    Downloaded,
    /// URL did not match the downloadable extension; no request made.
    SkippedNotEligible,
    /// Target file already on disk; no request made.
    SkippedExisting,
    /// Fetch or write failed.
    Failed(String),
}

/// Per-region counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegionStats {
    /// Tournament links harvested from the region's root page.
    pub tournaments: u64,
    /// Images written to the region's folder this run.
    pub images: u64,
}

/// Aggregate counters for one run.
///
/// Owned by the pipeline and passed by mutable reference to its helpers;
/// initialized empty at run start and read once at the end for the summary.
/// Nothing here survives the process: resumability comes from the on-disk
/// existence check, not from these counters.
#[derive(Debug, Default)]
pub struct RunStats {
    pub downloaded: u64,
    pub skipped_not_eligible: u64,
    pub skipped_existing: u64,
    pub errors: u64,
    pub regions: BTreeMap<String, RegionStats>,
}

impl RunStats {
    /// Counters for a region, created on first touch.
    pub fn region_mut(&mut self, region: &str) -> &mut RegionStats {
        self.regions.entry(region.to_string()).or_default()
    }

    /// Fold one download outcome into the aggregate.
    pub fn record(&mut self, region: &str, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded => {
                self.downloaded += 1;
                self.region_mut(region).images += 1;
            }
            DownloadOutcome::SkippedNotEligible => self.skipped_not_eligible += 1,
            DownloadOutcome::SkippedExisting => self.skipped_existing += 1,
            DownloadOutcome::Failed(_) => self.errors += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_downloaded_bumps_region_images() {
        let mut stats = RunStats::default();
        stats.record("Africa", &DownloadOutcome::Downloaded);
        stats.record("Africa", &DownloadOutcome::Downloaded);
        assert_eq!(stats.downloaded, 2);
        assert_eq!(stats.regions["Africa"].images, 2);
    }

    #[test]
    fn test_record_skips_and_failures() {
        let mut stats = RunStats::default();
        stats.record("Asia", &DownloadOutcome::SkippedNotEligible);
        stats.record("Asia", &DownloadOutcome::SkippedExisting);
        stats.record("Asia", &DownloadOutcome::Failed("HTTP 500".to_string()));
        assert_eq!(stats.downloaded, 0);
        assert_eq!(stats.skipped_not_eligible, 1);
        assert_eq!(stats.skipped_existing, 1);
        assert_eq!(stats.errors, 1);
        // Skips and failures do not count toward the region's image total.
        assert_eq!(stats.regions.get("Asia").map(|r| r.images), None);
    }

    #[test]
    fn test_region_mut_creates_on_first_touch() {
        let mut stats = RunStats::default();
        stats.region_mut("Europe").tournaments = 7;
        assert_eq!(stats.regions["Europe"].tournaments, 7);
        assert_eq!(stats.regions["Europe"].images, 0);
    }
}
