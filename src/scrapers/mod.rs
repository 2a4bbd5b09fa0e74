//! Page fetching and markup extraction.

mod http_client;
pub mod links;
pub mod region;

pub use http_client::{FetchError, HttpClient, USER_AGENT};

use async_trait::async_trait;

/// Transport seam between the pipeline and the network.
///
/// The production implementation is [`HttpClient`]; tests substitute an
/// in-memory fetcher serving canned pages.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a page body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch a resource body as raw bytes.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
