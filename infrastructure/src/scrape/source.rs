//! `TranscriptSource` adapter: listing resolution + per-page extraction.

use super::{ProviderSettings, listing, transcript};
use async_trait::async_trait;
use calltone_application::ports::document_fetcher::DocumentFetcher;
use calltone_application::ports::transcript_source::{SourceError, TranscriptSource};
use calltone_domain::{ParagraphFilter, TranscriptRecord};
use std::sync::Arc;
use tracing::{info, warn};

/// Sources transcripts by scraping the provider's listing and article pages.
///
/// Pages are fetched and extracted sequentially in listing order. A failed
/// fetch of any page aborts the batch with the transport error; extraction
/// itself cannot fail.
pub struct WebTranscriptSource<F: DocumentFetcher + 'static> {
    fetcher: Arc<F>,
    settings: ProviderSettings,
    filter: ParagraphFilter,
}

impl<F: DocumentFetcher + 'static> WebTranscriptSource<F> {
    pub fn new(fetcher: Arc<F>, settings: ProviderSettings) -> Self {
        let filter = ParagraphFilter::new(&settings.organization);
        Self {
            fetcher,
            settings,
            filter,
        }
    }
}

#[async_trait]
impl<F: DocumentFetcher + 'static> TranscriptSource for WebTranscriptSource<F> {
    async fn recent_transcripts(
        &self,
        limit: usize,
    ) -> Result<Vec<TranscriptRecord>, SourceError> {
        info!("Fetching listing {}", self.settings.listing_url);
        let listing_html = self.fetcher.fetch(&self.settings.listing_url).await?;

        if !listing_html
            .to_lowercase()
            .contains(&self.settings.company.to_lowercase())
        {
            warn!(
                "Listing page does not mention {}; it may have been redirected",
                self.settings.company
            );
        }

        let urls = listing::resolve_transcript_urls(&listing_html, &self.settings, limit);
        if urls.is_empty() {
            return Err(SourceError::NoListingsFound);
        }

        let mut records = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            info!("Processing transcript {}/{}: {}", i + 1, urls.len(), url);
            let html = self.fetcher.fetch(url).await?;
            records.push(transcript::extract_transcript(
                &html,
                url,
                &self.settings,
                &self.filter,
            ));
        }

        Ok(records)
    }
}
