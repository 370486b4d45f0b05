//! Management / Q&A section splitting.
//!
//! Earnings-call transcripts open with prepared management remarks and
//! usually switch to a question-and-answer session announced by an operator.
//! The switch point is located by an ordered list of marker patterns; the
//! first *pattern* that matches anywhere in the text wins, regardless of
//! where later-priority patterns would have matched.

use regex::RegexBuilder;

/// Q&A marker patterns in priority order.
///
/// Priority is by pattern, not by earliest position in the text: a
/// lower-priority marker appearing earlier in the transcript does not win
/// over a higher-priority one appearing later.
const QA_MARKERS: [&str; 5] = [
    r"question.{1,10}answer",
    r"q\s*&\s*a",
    r"operator",
    r"q\.?\s*&\.?\s*a\.?",
    r"questions?\s+and\s+answers?",
];

/// Split cleaned transcript text into `(management, qa)`.
///
/// The marker itself belongs to the Q&A side. When no marker matches, the
/// whole text is management and `qa` is empty. Total:
/// `management.len() + qa.len() == text.len()` always holds.
pub fn split_sections(text: &str) -> (&str, &str) {
    for pattern in QA_MARKERS {
        let Ok(marker) = RegexBuilder::new(pattern).case_insensitive(true).build() else {
            continue;
        };
        if let Some(m) = marker.find(text) {
            return text.split_at(m.start());
        }
    }
    (text, "")
}
