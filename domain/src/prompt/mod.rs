//! Prompt domain
//!
//! Templates for the two per-section model calls.

mod template;

pub use template::AnalysisPrompt;
