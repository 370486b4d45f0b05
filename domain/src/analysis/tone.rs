//! Quarter-over-quarter tone deltas.
//!
//! The tone score of a quarter is its management confidence, sign-flipped
//! when the management sentiment is negative. Positive and neutral share
//! the +1 sign; that asymmetry is part of the metric's definition.
//!
//! Deltas are computed against the *previous element of the sequence* (the
//! order transcripts were fetched, newest first), not against chronological
//! quarter order.

use crate::analysis::entities::{QuarterResult, SectionAnalysis};

/// Signed tone score of a section: `confidence * sentiment sign`.
pub fn tone_score(analysis: &SectionAnalysis) -> f64 {
    analysis.confidence * analysis.sentiment.sign()
}

/// Set `tone_change` on every element after the first.
///
/// `tone_change[i] = round2(score(results[i]) - score(results[i-1]))`,
/// using the management-section analysis. Element 0 keeps `None`.
pub fn apply_tone_changes(results: &mut [QuarterResult]) {
    for i in 1..results.len() {
        let current = tone_score(&results[i].management);
        let previous = tone_score(&results[i - 1].management);
        results[i].tone_change = Some(round2(current - previous));
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
