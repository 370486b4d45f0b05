//! Domain layer for calltone
//!
//! This crate contains the core business logic for earnings-call tone
//! analysis. It has no dependencies on infrastructure or presentation
//! concerns: no network, no filesystem, no HTML.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! A fetched earnings call, cleaned of markup noise and split into a
//! management-discussion section and a Q&A section:
//!
//! - **Cleaning**: boilerplate and ticker-noise paragraphs are dropped
//! - **Splitting**: ordered Q&A marker patterns locate the section boundary
//! - **Quarter derivation**: ordered strategies recover a `"Q<n> <year>"` label
//!
//! ## Analysis
//!
//! Per-section sentiment and strategic themes, normalized from free-form
//! model output, plus a quarter-over-quarter tone delta computed across the
//! newest-first result sequence.

pub mod analysis;
pub mod prompt;
pub mod transcript;

// Re-export commonly used types
pub use analysis::{
    entities::{QuarterResult, SectionAnalysis, Sentiment},
    response::{ResponseParseError, extract_json_fields},
    tone::{apply_tone_changes, tone_score},
};
pub use prompt::AnalysisPrompt;
pub use transcript::{
    clean::ParagraphFilter,
    entities::TranscriptRecord,
    fallback::builtin_transcripts,
    quarter::derive_quarter,
    sections::split_sections,
};
