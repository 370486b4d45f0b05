//! Provider scraping adapters
//!
//! Turns the provider's listing and article pages into
//! [`TranscriptRecord`](calltone_domain::TranscriptRecord)s:
//!
//! - [`listing::resolve_transcript_urls`] — ordered selector strategies over
//!   the listing page
//! - [`transcript::extract_transcript`] — title/date/body extraction with
//!   per-field fallbacks
//! - [`source::WebTranscriptSource`] — the `TranscriptSource` port adapter
//!   tying both to the page fetcher

pub mod listing;
pub mod source;
pub mod transcript;

pub use listing::resolve_transcript_urls;
pub use source::WebTranscriptSource;
pub use transcript::extract_transcript;

/// Provider-specific scraping settings.
///
/// Defaults target the Motley Fool transcript listing for NVIDIA; every
/// field can be overridden from the `[provider]` config section.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Listing page URL, including the company symbol query
    pub listing_url: String,
    /// Origin used to absolutize relative links
    pub origin: String,
    /// Company name, used for the listing fallback scan and default title
    pub company: String,
    /// Publisher organization, fed to the paragraph denylist
    pub organization: String,
    /// Path fragment that identifies transcript links
    pub transcript_path: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            listing_url: "https://www.fool.com/earnings-call-transcripts/?symbol=NVDA".to_string(),
            origin: "https://www.fool.com".to_string(),
            company: "NVIDIA".to_string(),
            organization: "The Motley Fool".to_string(),
            transcript_path: "/earnings-call-transcripts/".to_string(),
        }
    }
}
