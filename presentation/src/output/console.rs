//! Console output formatter for analysis results

use calltone_domain::{QuarterResult, Sentiment};
use colored::Colorize;

/// Formats quarter results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full result sequence for the terminal.
    pub fn format(results: &[QuarterResult]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Earnings Call Tone Analysis"));
        output.push('\n');

        for result in results {
            output.push_str(&format!(
                "\n{}  {}\n",
                format!("── {} ──", result.quarter).yellow().bold(),
                result.date.dimmed()
            ));

            output.push_str(&format!(
                "  {} {} (confidence {:.2})\n",
                "Management:".cyan().bold(),
                Self::sentiment_label(result.management.sentiment),
                result.management.confidence
            ));
            output.push_str(&format!(
                "  {}         {} (confidence {:.2})\n",
                "Q&A:".cyan().bold(),
                Self::sentiment_label(result.qa.sentiment),
                result.qa.confidence
            ));

            if let Some(delta) = result.tone_change {
                let formatted = format!("{delta:+.2}");
                let colored_delta = if delta < 0.0 {
                    formatted.red()
                } else {
                    formatted.green()
                };
                output.push_str(&format!(
                    "  {}  {}\n",
                    "Tone change:".cyan().bold(),
                    colored_delta
                ));
            }

            if !result.management.themes.is_empty() {
                output.push_str(&format!("  {}\n", "Themes:".cyan().bold()));
                for theme in &result.management.themes {
                    output.push_str(&format!("    * {theme}\n"));
                }
            }
        }

        output
    }

    /// Format as JSON, the same shape the HTTP endpoint serves.
    pub fn format_json(results: &[QuarterResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    fn sentiment_label(sentiment: Sentiment) -> String {
        match sentiment {
            Sentiment::Positive => "positive".green().bold().to_string(),
            Sentiment::Neutral => "neutral".normal().to_string(),
            Sentiment::Negative => "negative".red().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calltone_domain::SectionAnalysis;

    fn result() -> QuarterResult {
        let mut result = QuarterResult::new(
            "Q1 2025",
            "2024-05-22",
            SectionAnalysis::new(Sentiment::Positive, 0.8, vec!["AI demand".to_string()]),
            SectionAnalysis::default(),
            "content",
        );
        result.tone_change = Some(-0.2);
        result
    }

    #[test]
    fn test_format_mentions_quarter_and_themes() {
        let output = ConsoleFormatter::format(&[result()]);
        assert!(output.contains("Q1 2025"));
        assert!(output.contains("AI demand"));
        assert!(output.contains("-0.20"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let json = ConsoleFormatter::format_json(&[result()]);
        let parsed: Vec<QuarterResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].quarter, "Q1 2025");
        assert_eq!(parsed[0].tone_change, Some(-0.2));
    }
}
