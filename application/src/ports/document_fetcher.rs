//! Document Fetcher port
//!
//! Defines the interface for fetching raw page content by URL.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Timeout fetching {0}")]
    Timeout(String),
}

/// Fetches raw page content by URL
///
/// The adapter is expected to present itself as a regular browser
/// navigation (user agent and standard navigation headers), since transcript
/// providers reject obvious bots. Non-2xx responses and network failures
/// both surface as [`FetchError`].
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the page at `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
