//! Application layer for calltone
//!
//! Use cases and ports. This crate orchestrates the analysis pipeline and
//! defines the interfaces (ports) that infrastructure adapters implement:
//! fetching pages, sourcing transcripts, and calling the language model.
//!
//! # Architecture
//!
//! ```text
//! TranscriptSource ──> TranscriptRecord ──> SectionAnalyzer ──> QuarterResult
//!      (port)              (domain)         (ModelGateway port)   (domain)
//!                                                  │
//!                                        apply_tone_changes
//! ```

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalysisParams;
pub use ports::{
    analysis_store::AnalysisStore,
    document_fetcher::{DocumentFetcher, FetchError},
    model_gateway::{GatewayError, ModelGateway},
    transcript_source::{SourceError, TranscriptSource},
};
pub use use_cases::{
    analyze_quarters::{AnalyzeQuartersError, AnalyzeQuartersUseCase},
    analyze_section::SectionAnalyzer,
};
