//! Day-granularity JSON file cache for analysis results.
//!
//! The serving layer checks the cache before running the pipeline and
//! stores the fresh result afterwards. Freshness is a simple file-age
//! check; there is no locking, and concurrent regeneration is accepted.

use calltone_application::ports::analysis_store::AnalysisStore;
use calltone_domain::QuarterResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// File cache holding one serialized result sequence.
pub struct AnalysisCache {
    path: PathBuf,
    ttl: Duration,
}

impl AnalysisCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached results if the file exists, is younger than the TTL,
    /// and still deserializes. Anything else means a miss.
    fn read_fresh(&self) -> Option<Vec<QuarterResult>> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        let age = SystemTime::now().duration_since(modified).ok()?;
        if age >= self.ttl {
            debug!("Cache at {} is stale ({}s old)", self.path.display(), age.as_secs());
            return None;
        }

        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(results) => {
                debug!("Serving cached analysis from {}", self.path.display());
                Some(results)
            }
            Err(e) => {
                warn!("Discarding unreadable cache {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Store results, creating parent directories as needed.
    ///
    /// Failures are logged and swallowed; the cache is an optimization,
    /// not a requirement.
    fn write(&self, results: &[QuarterResult]) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("Could not create cache directory {}: {}", parent.display(), e);
            return;
        }

        let json = match serde_json::to_string(results) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize analysis results: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            warn!("Could not write cache {}: {}", self.path.display(), e);
        }
    }
}

impl AnalysisStore for AnalysisCache {
    fn load_fresh(&self) -> Option<Vec<QuarterResult>> {
        self.read_fresh()
    }

    fn store(&self, results: &[QuarterResult]) {
        self.write(results)
    }
}
