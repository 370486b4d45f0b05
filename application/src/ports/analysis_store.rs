//! Analysis Store port
//!
//! Defines the interface for the day-granularity result cache that fronts
//! the pipeline. The store is best-effort: a miss (absent, stale, or
//! unreadable) simply means the pipeline runs, and a failed write is
//! swallowed by the adapter.

use calltone_domain::QuarterResult;

/// Cache for one serialized result sequence
pub trait AnalysisStore: Send + Sync {
    /// The cached results, if present and still fresh.
    fn load_fresh(&self) -> Option<Vec<QuarterResult>>;

    /// Store freshly computed results.
    fn store(&self, results: &[QuarterResult]);
}
