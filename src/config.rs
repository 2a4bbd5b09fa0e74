//! Run configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::scrapers::USER_AGENT;

/// Config filename auto-discovered in the working directory.
pub const CONFIG_FILE: &str = "logocrawl.toml";

/// Settings for one crawl run.
///
/// Values come from an optional TOML file; every field has a working
/// default, so the tool runs with no config at all. Missing keys fall
/// back field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root region pages to scrape, in order.
    pub root_urls: Vec<String>,
    /// Directory receiving one folder per discovered region.
    pub output_dir: String,
    /// Client identity presented to the target server.
    pub user_agent: String,
    /// Banner printed at startup.
    pub banner: String,
    /// CSS selector for tournament menu links on a root page.
    pub tournament_selector: String,
    /// CSS selector for logo images on a tournament page.
    pub image_selector: String,
    /// Dotted, lowercase extension an asset URL must end with.
    pub asset_extension: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Base delay between requests in milliseconds.
    pub request_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_urls: vec![
                "https://www.flashscore.com/football/africa".to_string(),
                "https://www.flashscore.com/football/asia".to_string(),
            ],
            output_dir: "./output".to_string(),
            user_agent: USER_AGENT.to_string(),
            banner: "Flashscore...".to_string(),
            tournament_selector: "a.leftMenu__href".to_string(),
            image_selector: "img.heading__logo.heading__logo--1".to_string(),
            asset_extension: ".png".to_string(),
            request_timeout_secs: 30,
            request_delay_ms: 0,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, the discovered config file, or
    /// defaults when neither exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let discovered = PathBuf::from(CONFIG_FILE);
                discovered.exists().then_some(discovered)
            }
        };
        let Some(file) = candidate else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(&file)
            .with_context(|| format!("reading config file {}", file.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", file.display()))?;
        Ok(settings)
    }

    /// Output root with `~` expanded.
    pub fn output_root(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output_dir).into_owned())
    }

    /// Create the output root if missing. Idempotent.
    pub fn ensure_directories(&self) -> anyhow::Result<()> {
        let root = self.output_root();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating output directory {}", root.display()))?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.root_urls.len(), 2);
        assert_eq!(settings.output_dir, "./output");
        assert_eq!(settings.asset_extension, ".png");
        assert_eq!(settings.request_delay_ms, 0);
        assert_eq!(settings.banner, "Flashscore...");
    }

    #[test]
    fn test_load_partial_file_keeps_defaults_for_missing_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logocrawl.toml");
        fs::write(
            &path,
            concat!(
                "output_dir = \"/tmp/logos\"\n",
                "request_delay_ms = 250\n",
                "root_urls = [\"https://example.com/football/africa\"]\n"
            ),
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.output_dir, "/tmp/logos");
        assert_eq!(settings.request_delay_ms, 250);
        assert_eq!(settings.root_urls, vec!["https://example.com/football/africa"]);
        // Untouched keys keep their defaults.
        assert_eq!(settings.asset_extension, ".png");
        assert_eq!(settings.tournament_selector, "a.leftMenu__href");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Settings::load(Some(Path::new("/nonexistent/logocrawl.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logocrawl.toml");
        fs::write(&path, "root_urls = 5").unwrap();
        assert!(Settings::load(Some(&path)).is_err());
    }
}
