//! Prompt templates for section analysis

/// Templates for the sentiment and theme-extraction calls.
///
/// Both prompts demand strict JSON; the response extractor still tolerates
/// prose wrapping since models do not reliably comply.
pub struct AnalysisPrompt;

impl AnalysisPrompt {
    /// Sentiment scoring prompt for one section.
    pub fn sentiment(section_text: &str) -> String {
        format!(
            r#"Analyze the sentiment in the following earnings call transcript section:
{}

Return JSON only: {{
    "sentiment": "positive|neutral|negative",
    "confidence": 0-1
}}"#,
            section_text
        )
    }

    /// Strategic-theme extraction prompt for one section.
    pub fn themes(section_text: &str) -> String {
        format!(
            r#"Identify 3-5 key strategic focuses in this management discussion:
{}

Return JSON only: {{
    "themes": ["theme1", "theme2", ...]
}}"#,
            section_text
        )
    }
}
