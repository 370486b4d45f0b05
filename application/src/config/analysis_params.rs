//! Analysis parameters — pipeline loop control.
//!
//! [`AnalysisParams`] groups the static parameters that control the
//! analysis pipeline in
//! [`AnalyzeQuartersUseCase`](crate::use_cases::analyze_quarters::AnalyzeQuartersUseCase)
//! and [`SectionAnalyzer`](crate::use_cases::analyze_section::SectionAnalyzer).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Pipeline control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Maximum number of transcripts fetched and analyzed per run.
    pub transcript_limit: usize,
    /// Sections with fewer stripped characters than this are not sent to
    /// the model at all; they get the default analysis.
    pub min_section_chars: usize,
    /// Hard character cut applied to section text before prompting.
    pub max_section_chars: usize,
    /// Substitute the built-in dataset when the provider fails entirely.
    /// When false, the source error surfaces to the caller instead.
    pub fallback_enabled: bool,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            transcript_limit: 4,
            min_section_chars: 100,
            max_section_chars: 6000,
            fallback_enabled: true,
        }
    }
}

impl AnalysisParams {
    // ==================== Builder Methods ====================

    pub fn with_transcript_limit(mut self, limit: usize) -> Self {
        self.transcript_limit = limit;
        self
    }

    pub fn with_min_section_chars(mut self, min: usize) -> Self {
        self.min_section_chars = min;
        self
    }

    pub fn with_max_section_chars(mut self, max: usize) -> Self {
        self.max_section_chars = max;
        self
    }

    pub fn with_fallback_enabled(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = AnalysisParams::default();
        assert_eq!(params.transcript_limit, 4);
        assert_eq!(params.min_section_chars, 100);
        assert_eq!(params.max_section_chars, 6000);
        assert!(params.fallback_enabled);
    }

    #[test]
    fn test_builder() {
        let params = AnalysisParams::default()
            .with_transcript_limit(2)
            .with_max_section_chars(1000)
            .with_fallback_enabled(false);

        assert_eq!(params.transcript_limit, 2);
        assert_eq!(params.max_section_chars, 1000);
        assert!(!params.fallback_enabled);
    }
}
