//! Analysis domain
//!
//! Per-section sentiment/theme records and the quarter-over-quarter tone
//! delta:
//!
//! - [`entities::SectionAnalysis`] — normalized model verdict for one section
//! - [`entities::QuarterResult`] — one quarter's full analysis record
//! - [`response::extract_json_fields`] — layered extraction of structured
//!   fields from free-form model output
//! - [`tone::apply_tone_changes`] — signed tone deltas across the sequence

pub mod entities;
pub mod response;
pub mod tone;

// Re-export main types
pub use entities::{QuarterResult, SectionAnalysis, Sentiment};
pub use response::{ResponseParseError, extract_json_fields};
pub use tone::{apply_tone_changes, tone_score};
