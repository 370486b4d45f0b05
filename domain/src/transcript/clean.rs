//! Paragraph-level noise rejection.
//!
//! Transcript pages interleave the call text with boilerplate (publisher
//! credits, copyright footers, "transcript" banners) and stock-quote noise
//! (bare ticker symbols and price fragments rendered as their own
//! paragraphs). [`ParagraphFilter`] drops both classes.

use regex::Regex;

/// Denylist substrings applied to every provider, regardless of configuration.
const STANDARD_DENYLIST: [&str; 2] = ["copyright", "transcript"];

/// Whole-paragraph pattern for ticker symbols and bare price fragments,
/// e.g. `NVDA`, `GOOG2`, `123.45`, `8.5%`.
const TICKER_PATTERN: &str = r"^(?:[A-Z]{1,5}\d*\.?\d*%?|\d+\.?\d*%?)$";

/// Rejects paragraphs that are empty, contain a denylisted substring
/// (case-insensitive), or consist solely of ticker/price noise.
#[derive(Debug, Clone)]
pub struct ParagraphFilter {
    denylist: Vec<String>,
    ticker: Regex,
}

impl ParagraphFilter {
    /// Build a filter for the given publisher organization.
    ///
    /// The organization name joins the standard denylist so credit lines
    /// like "(c) 2024 The Example Press" are dropped along with copyright
    /// and transcript banners.
    pub fn new(organization: &str) -> Self {
        let mut denylist: Vec<String> = STANDARD_DENYLIST
            .iter()
            .map(|term| term.to_string())
            .collect();
        let organization = organization.trim().to_lowercase();
        if !organization.is_empty() {
            denylist.push(organization);
        }

        Self {
            denylist,
            ticker: Regex::new(TICKER_PATTERN).expect("ticker pattern is valid"),
        }
    }

    /// True when the paragraph should be dropped from the transcript body.
    pub fn is_noise(&self, paragraph: &str) -> bool {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            return true;
        }

        let lowered = trimmed.to_lowercase();
        if self.denylist.iter().any(|term| lowered.contains(term)) {
            return true;
        }

        self.ticker.is_match(trimmed)
    }

    /// Filter an iterator of paragraphs and join the survivors with newlines.
    pub fn clean_body<'a>(&self, paragraphs: impl Iterator<Item = &'a str>) -> String {
        paragraphs
            .map(str::trim)
            .filter(|p| !self.is_noise(p))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ParagraphFilter {
        ParagraphFilter::new("The Motley Fool")
    }

    #[test]
    fn test_empty_paragraph_is_noise() {
        assert!(filter().is_noise(""));
        assert!(filter().is_noise("   "));
    }

    #[test]
    fn test_ticker_symbol_is_noise() {
        assert!(filter().is_noise("NVDA"));
        assert!(filter().is_noise("GOOG2"));
        assert!(filter().is_noise("ABC1.5%"));
    }

    #[test]
    fn test_bare_price_fragment_is_noise() {
        assert!(filter().is_noise("123.45"));
        assert!(filter().is_noise("8.5%"));
    }

    #[test]
    fn test_copyright_line_is_noise() {
        assert!(filter().is_noise("Copyright 2024 The Motley Fool"));
        assert!(filter().is_noise("courtesy of the motley fool"));
    }

    #[test]
    fn test_transcript_banner_is_noise() {
        assert!(filter().is_noise("This Transcript is provided as-is"));
    }

    #[test]
    fn test_call_text_survives() {
        let f = filter();
        assert!(!f.is_noise("Revenue grew 22% year over year."));
        assert!(!f.is_noise("Demand for Blackwell is overwhelming."));
    }

    #[test]
    fn test_lowercase_words_are_not_tickers() {
        assert!(!filter().is_noise("nvda")); // ticker match is case-sensitive
        assert!(!filter().is_noise("Growth"));
    }

    #[test]
    fn test_clean_body_joins_survivors() {
        let paragraphs = vec![
            "First remark.",
            "NVDA",
            "Copyright 2024 The Motley Fool",
            "Second remark.",
        ];
        let body = filter().clean_body(paragraphs.into_iter());
        assert_eq!(body, "First remark.\nSecond remark.");
    }
}
