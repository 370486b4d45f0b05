//! reqwest-backed implementation of the [`DocumentFetcher`] port.
//!
//! Transcript providers serve different markup (or a block page) to clients
//! that do not look like a browser, so every request carries a desktop
//! user agent and the standard navigation headers.

use async_trait::async_trait;
use calltone_application::ports::document_fetcher::{DocumentFetcher, FetchError};
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Desktop browser user agent sent with every page request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetches pages over HTTP with browser-like navigation headers.
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
}

impl HttpDocumentFetcher {
    /// Build a fetcher with the default timeout; `referer` is the provider
    /// origin sent as the Referer header.
    pub fn new(referer: &str) -> Result<Self, FetchError> {
        Self::with_timeout(referer, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(referer: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
            ),
        );
        headers.insert("Accept-Language", HeaderValue::from_static("en-US,en;q=0.7"));
        headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("document"));
        headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("navigate"));
        headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-origin"));
        if let Ok(value) = HeaderValue::from_str(referer) {
            headers.insert("Referer", value);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                url: referer.to_string(),
                reason: format!("client build failed: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: format!("body read failed: {e}"),
        })
    }
}
