//! Page fetching adapter

mod http_fetcher;

pub use http_fetcher::HttpDocumentFetcher;
