//! Transcript Source port
//!
//! Defines the interface for obtaining recent transcripts from a provider.

use crate::ports::document_fetcher::FetchError;
use async_trait::async_trait;
use calltone_domain::TranscriptRecord;
use thiserror::Error;

/// Errors that can occur while sourcing transcripts
#[derive(Error, Debug)]
pub enum SourceError {
    /// The listing page yielded no transcript links. Treated exactly like a
    /// fetch failure by the pipeline (fallback dataset or surfaced error).
    #[error("No transcript listings found")]
    NoListingsFound,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Provides recent transcripts for the configured company, newest first
///
/// The order of the returned records is the provider's listing order; the
/// tone-delta pass compares each record to its predecessor in this exact
/// order. Records may have an empty `qa` section.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch and extract up to `limit` recent transcripts.
    async fn recent_transcripts(&self, limit: usize)
    -> Result<Vec<TranscriptRecord>, SourceError>;
}
