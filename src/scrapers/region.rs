//! Region name discovery from page markup.
//!
//! The region is named by the page's navigational breadcrumb. Breadcrumb
//! markup varies across page variants, so discovery is an ordered cascade
//! of strategies; the first one to produce a non-empty candidate wins and
//! the candidate is sanitized into a folder-safe name.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::utils::names::{sanitize_folder_name, title_case};

/// Sentinel returned when no strategy produces a usable name.
pub const UNKNOWN_REGION: &str = "Unknown-Region";

const BREADCRUMB_CLASS: &str = "breadcrumb__link";

fn breadcrumb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"</span>\s*<a\s+class="breadcrumb__link"\s+href="[^"]+">([^<]+)</a>"#)
            .expect("breadcrumb pattern is valid")
    })
}

fn span_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("span").expect("span selector is valid"))
}

fn breadcrumb_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR
        .get_or_init(|| Selector::parse("a.breadcrumb__link").expect("breadcrumb selector is valid"))
}

/// Derive the region's folder name for a fetched root page.
///
/// Total over arbitrary markup: a page with no usable breadcrumb falls
/// through to [`UNKNOWN_REGION`] rather than failing the crawl.
pub fn extract_region_name(raw: &str, doc: &Html, root_urls: &[Url]) -> String {
    let candidate = from_raw_pattern(raw)
        .or_else(|| from_span_sibling(doc))
        .or_else(|| from_any_breadcrumb(doc))
        .or_else(|| from_root_url(raw, root_urls));

    match candidate {
        Some(name) => sanitize_folder_name(&name),
        None => {
            debug!("no region breadcrumb found, using sentinel");
            UNKNOWN_REGION.to_string()
        }
    }
}

/// Primary strategy: pattern-match the raw markup for a breadcrumb anchor
/// immediately following a closing span.
fn from_raw_pattern(raw: &str) -> Option<String> {
    breadcrumb_pattern()
        .captures(raw)
        .map(|captures| captures[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Structural fallback: a span whose immediate next sibling node is an
/// anchor carrying the breadcrumb class.
fn from_span_sibling(doc: &Html) -> Option<String> {
    for span in doc.select(span_selector()) {
        let Some(sibling) = span.next_sibling() else {
            continue;
        };
        let Some(anchor) = ElementRef::wrap(sibling) else {
            continue;
        };
        if anchor.value().name() != "a" {
            continue;
        }
        if !anchor.value().classes().any(|c| c == BREADCRUMB_CLASS) {
            continue;
        }
        let text = anchor.text().collect::<String>();
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }
    None
}

/// Second fallback: any breadcrumb anchor in the document with non-empty
/// trimmed text.
fn from_any_breadcrumb(doc: &Html) -> Option<String> {
    doc.select(breadcrumb_selector())
        .map(|anchor| anchor.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
}

/// Last fallback: a configured root URL embedded verbatim in the markup
/// names the region via its final path segment.
fn from_root_url(raw: &str, root_urls: &[Url]) -> Option<String> {
    root_urls
        .iter()
        .find(|url| raw.contains(url.as_str()))
        .map(|url| {
            let segment = url.as_str().rsplit('/').next().unwrap_or_default();
            title_case(&segment.replace('-', " "))
        })
        .filter(|name| !name.is_empty())
}
