//! Infrastructure layer for calltone
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the browser-like page fetcher, the provider scraping
//! (listing resolution and transcript extraction), the model gateway, the
//! analysis file cache, and configuration file loading.

pub mod cache;
pub mod config;
pub mod fetch;
pub mod providers;
pub mod scrape;

// Re-export commonly used types
pub use cache::AnalysisCache;
pub use config::{ConfigLoader, FileCacheConfig, FileConfig, FileModelConfig, FileProviderConfig};
pub use fetch::HttpDocumentFetcher;
pub use providers::OpenAiGateway;
pub use scrape::WebTranscriptSource;
