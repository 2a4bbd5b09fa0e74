//! Live console reporting for a crawl run.
//!
//! One line per event, written unbuffered so a supervising process can
//! stream progress as it happens. Markers are styled only when stdout is a
//! terminal; piped output is plain text.

use console::{style, Term};

use crate::models::RunStats;

/// Maximum error-message length echoed to the console.
const ERROR_PREVIEW_CHARS: usize = 50;

fn truncate_error(message: &str) -> String {
    message.chars().take(ERROR_PREVIEW_CHARS).collect()
}

/// Writes the run's progress lines to stdout.
pub struct Reporter {
    term: Term,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        // Reporting must never fail the crawl.
        let _ = self.term.write_line(text);
    }

    /// Startup banner.
    pub fn banner(&self, banner: &str) {
        self.line(banner);
    }

    /// Region header with its tournament count.
    pub fn region_header(&self, region: &str, tournaments: usize) {
        self.line(&format!("\n{} ({} tournaments)", region, tournaments));
    }

    /// One successful download, shown with the original display name.
    pub fn downloaded(&self, display_name: &str) {
        self.line(&format!("{} {}", style("+").green(), display_name));
    }

    /// One failed download.
    pub fn download_error(&self, display_name: &str, message: &str) {
        self.line(&format!(
            "{} Error with {}: {}...",
            style("!").red(),
            display_name,
            truncate_error(message)
        ));
    }

    /// A root page that could not be scraped.
    pub fn scrape_error(&self, url: &str, message: &str) {
        self.line(&format!("Error scraping {}: {}", url, message));
    }

    /// A tournament page that could not be processed.
    pub fn tournament_error(&self, message: &str) {
        self.line(&format!(
            "Error processing tournament: {}...",
            truncate_error(message)
        ));
    }

    /// Final aggregate counts.
    pub fn summary(&self, stats: &RunStats) {
        self.line(&format!(
            "\nTotal: {} done, {} skip, {} error",
            stats.downloaded, stats.skipped_not_eligible, stats.errors
        ));
    }

    /// Trailing completion line.
    pub fn complete(&self) {
        self.line("\nComplete!");
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_error_bounds_length() {
        let long = "x".repeat(200);
        assert_eq!(truncate_error(&long).chars().count(), ERROR_PREVIEW_CHARS);
        assert_eq!(truncate_error("short"), "short");
    }

    #[test]
    fn test_truncate_error_respects_char_boundaries() {
        let message = "é".repeat(60);
        assert_eq!(truncate_error(&message), "é".repeat(50));
    }
}
