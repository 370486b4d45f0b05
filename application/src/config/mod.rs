//! Application-layer configuration

mod analysis_params;

pub use analysis_params::AnalysisParams;
