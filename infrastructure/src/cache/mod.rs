//! Analysis result caching

mod analysis_cache;

pub use analysis_cache::AnalysisCache;
