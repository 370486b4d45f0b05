//! Transcript entities.

use crate::transcript::sections::split_sections;
use serde::{Deserialize, Serialize};

/// One cleaned, sectioned earnings-call transcript.
///
/// `content` holds the full cleaned text. When a Q&A marker was found,
/// `content == management + qa`; otherwise `management == content` and
/// `qa` is empty. Records are constructed once per fetched transcript and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Quarter label, `"Q<1-4> <year>"` or `"Unknown Quarter"`
    pub quarter: String,
    /// Report date, ISO `YYYY-MM-DD` when available, provider text otherwise
    pub date: String,
    /// Full cleaned transcript text
    pub content: String,
    /// Prepared management remarks (text before the Q&A marker)
    pub management: String,
    /// Question-and-answer session (marker onward), empty when none was found
    pub qa: String,
}

impl TranscriptRecord {
    /// Build a record from cleaned full text, splitting it into sections.
    pub fn new(
        quarter: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let (management, qa) = split_sections(&content);
        let (management, qa) = (management.to_string(), qa.to_string());

        Self {
            quarter: quarter.into(),
            date: date.into(),
            content,
            management,
            qa,
        }
    }

    /// Build a record from pre-sectioned parts (built-in dataset, tests).
    pub fn from_parts(
        quarter: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
        management: impl Into<String>,
        qa: impl Into<String>,
    ) -> Self {
        Self {
            quarter: quarter.into(),
            date: date.into(),
            content: content.into(),
            management: management.into(),
            qa: qa.into(),
        }
    }

    /// True when a Q&A section was found.
    pub fn has_qa(&self) -> bool {
        !self.qa.is_empty()
    }
}
