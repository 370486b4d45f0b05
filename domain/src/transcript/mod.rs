//! Transcript domain
//!
//! Everything that turns a noisy provider page into a clean, sectioned
//! transcript record:
//!
//! - [`entities::TranscriptRecord`] — one cleaned, sectioned earnings call
//! - [`quarter::derive_quarter`] — ordered strategies for the quarter label
//! - [`clean::ParagraphFilter`] — boilerplate and ticker-noise rejection
//! - [`sections::split_sections`] — management / Q&A boundary detection
//! - [`fallback::builtin_transcripts`] — built-in dataset for total fetch failure

pub mod clean;
pub mod entities;
pub mod fallback;
pub mod quarter;
pub mod sections;

// Re-export main types
pub use clean::ParagraphFilter;
pub use entities::TranscriptRecord;
pub use fallback::builtin_transcripts;
pub use quarter::derive_quarter;
pub use sections::split_sections;
