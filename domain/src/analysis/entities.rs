//! Analysis entities - immutable per-section and per-quarter records.

use serde::{Deserialize, Serialize};

/// Sentiment verdict for one transcript section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Normalize a free-form label, case-insensitively.
    ///
    /// Anything other than "positive" or "negative" collapses to `Neutral`,
    /// so malformed model output degrades instead of failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Tone sign: -1 for negative, +1 otherwise.
    ///
    /// Positive and neutral share the same sign; only the negative verdict
    /// flips the tone score.
    pub fn sign(&self) -> f64 {
        match self {
            Sentiment::Negative => -1.0,
            _ => 1.0,
        }
    }
}

/// Normalized model verdict for one transcript section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    /// Sentiment verdict
    pub sentiment: Sentiment,
    /// Model-reported confidence, passed through unclamped
    pub confidence: f64,
    /// Up to [`SectionAnalysis::MAX_THEMES`] strategic themes, model order
    pub themes: Vec<String>,
}

impl SectionAnalysis {
    /// Maximum number of themes kept per section.
    pub const MAX_THEMES: usize = 5;

    /// Build an analysis, truncating themes to [`Self::MAX_THEMES`].
    pub fn new(sentiment: Sentiment, confidence: f64, mut themes: Vec<String>) -> Self {
        themes.truncate(Self::MAX_THEMES);
        Self {
            sentiment,
            confidence,
            themes,
        }
    }
}

impl Default for SectionAnalysis {
    /// The degraded verdict: neutral at 0.5 confidence with no themes.
    ///
    /// Used for sparse sections and for every unrecoverable model failure.
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
            themes: Vec::new(),
        }
    }
}

/// One quarter's complete analysis record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterResult {
    /// Quarter label, `"Q<1-4> <year>"` or `"Unknown Quarter"`
    pub quarter: String,
    /// Report date
    pub date: String,
    /// Management-section analysis
    pub management: SectionAnalysis,
    /// Q&A-section analysis
    pub qa: SectionAnalysis,
    /// Full cleaned transcript text
    pub content: String,
    /// Signed tone change versus the previous element in the sequence.
    /// Absent (omitted from JSON, not null) on the first element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_change: Option<f64>,
}

impl QuarterResult {
    pub fn new(
        quarter: impl Into<String>,
        date: impl Into<String>,
        management: SectionAnalysis,
        qa: SectionAnalysis,
        content: impl Into<String>,
    ) -> Self {
        Self {
            quarter: quarter.into(),
            date: date.into(),
            management,
            qa,
            content: content.into(),
            tone_change: None,
        }
    }
}
