//! Use cases for the analysis pipeline

pub mod analyze_quarters;
pub mod analyze_section;

pub use analyze_quarters::{AnalyzeQuartersError, AnalyzeQuartersUseCase};
pub use analyze_section::SectionAnalyzer;
