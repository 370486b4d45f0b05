//! Analyze Section use case — the per-section quarter analyzer.
//!
//! Runs two independent model calls per section (sentiment, themes) and
//! normalizes whatever comes back into a [`SectionAnalysis`]. Every failure
//! mode short of a programming error degrades to field defaults: sparse
//! sections skip the model entirely, and call or parse failures are logged
//! and absorbed.

use crate::config::AnalysisParams;
use crate::ports::model_gateway::ModelGateway;
use calltone_domain::{AnalysisPrompt, SectionAnalysis, Sentiment, extract_json_fields};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for analyzing one transcript section
pub struct SectionAnalyzer<G: ModelGateway + 'static> {
    gateway: Arc<G>,
    params: AnalysisParams,
}

impl<G: ModelGateway + 'static> SectionAnalyzer<G> {
    pub fn new(gateway: Arc<G>, params: AnalysisParams) -> Self {
        Self { gateway, params }
    }

    /// Analyze a section, returning the default analysis for sparse text.
    ///
    /// `section` is a display label ("management" / "qa") used only for
    /// logging.
    pub async fn analyze(&self, text: &str, section: &str) -> SectionAnalysis {
        if text.trim().chars().count() < self.params.min_section_chars {
            debug!("Section '{}' below minimum length, skipping model", section);
            return SectionAnalysis::default();
        }

        // Hard character cut to bound prompt cost; deliberately not
        // sentence-aware.
        let truncated: String = text.chars().take(self.params.max_section_chars).collect();

        let sentiment_fields = self
            .query_fields(&AnalysisPrompt::sentiment(&truncated), section, "sentiment")
            .await;
        let theme_fields = self
            .query_fields(&AnalysisPrompt::themes(&truncated), section, "themes")
            .await;

        let sentiment = sentiment_fields
            .get("sentiment")
            .and_then(Value::as_str)
            .map(Sentiment::from_label)
            .unwrap_or_default();

        // Pass the model's confidence through as-is; out-of-range values
        // are the model's to own, not this layer's to clamp.
        let confidence = sentiment_fields
            .get("confidence")
            .and_then(coerce_confidence)
            .unwrap_or(0.5);

        let themes = theme_fields
            .get("themes")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        SectionAnalysis::new(sentiment, confidence, themes)
    }

    /// One model call plus layered extraction; empty mapping on any failure.
    async fn query_fields(
        &self,
        prompt: &str,
        section: &str,
        call: &str,
    ) -> Map<String, Value> {
        match self.gateway.complete(prompt).await {
            Ok(response) => match extract_json_fields(&response) {
                Ok(fields) => fields,
                Err(e) => {
                    warn!("Unparsable {} response for section '{}': {}", call, section, e);
                    Map::new()
                }
            },
            Err(e) => {
                warn!("Model {} call failed for section '{}': {}", call, section, e);
                Map::new()
            }
        }
    }
}

/// Coerce a JSON value into a confidence float (number or numeric string).
fn coerce_confidence(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_gateway::GatewayError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway returning scripted responses in order; errors are scripted
    /// as `Err(message)`.
    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<String, String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<&str, &str>>) -> Self {
            Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(String::from).map_err(String::from))
                        .collect(),
                ),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        async fn complete(&self, _prompt: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err("script exhausted".to_string()))
                .map_err(GatewayError::RequestFailed)
        }
    }

    fn analyzer(gateway: Arc<ScriptedGateway>) -> SectionAnalyzer<ScriptedGateway> {
        SectionAnalyzer::new(gateway, AnalysisParams::default())
    }

    fn long_text() -> String {
        "Revenue grew strongly across all segments this quarter. ".repeat(10)
    }

    #[tokio::test]
    async fn test_short_section_skips_model_entirely() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let analysis = analyzer(Arc::clone(&gateway)).analyze("too short", "management").await;

        assert_eq!(analysis, SectionAnalysis::default());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_section_skips_model() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let padded = format!("   {}   ", "x".repeat(50));
        let analysis = analyzer(Arc::clone(&gateway)).analyze(&padded, "qa").await;

        assert_eq!(analysis, SectionAnalysis::default());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_well_formed_responses_are_normalized() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(r#"{"sentiment": "Positive", "confidence": 0.87}"#),
            Ok(r#"{"themes": ["AI demand", "Data center", "Gross margin"]}"#),
        ]));
        let analysis = analyzer(Arc::clone(&gateway)).analyze(&long_text(), "management").await;

        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.confidence, 0.87);
        assert_eq!(analysis.themes.len(), 3);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_not_clamped() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(r#"{"sentiment": "positive", "confidence": 1.7}"#),
            Ok(r#"{"themes": []}"#),
        ]));
        let analysis = analyzer(gateway).analyze(&long_text(), "management").await;

        assert_eq!(analysis.confidence, 1.7);
    }

    #[tokio::test]
    async fn test_failed_sentiment_call_degrades_that_field_only() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err("model unavailable"),
            Ok(r#"{"themes": ["Supply chain"]}"#),
        ]));
        let analysis = analyzer(gateway).analyze(&long_text(), "management").await;

        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.confidence, 0.5);
        assert_eq!(analysis.themes, vec!["Supply chain".to_string()]);
    }

    #[tokio::test]
    async fn test_unparsable_response_degrades_to_defaults() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("the tone was pretty upbeat overall"),
            Ok("no structure here either"),
        ]));
        let analysis = analyzer(gateway).analyze(&long_text(), "qa").await;

        assert_eq!(analysis, SectionAnalysis::default());
    }

    #[tokio::test]
    async fn test_themes_truncated_to_five() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(r#"{"sentiment": "neutral", "confidence": 0.6}"#),
            Ok(r#"{"themes": ["a", "b", "c", "d", "e", "f", "g"]}"#),
        ]));
        let analysis = analyzer(gateway).analyze(&long_text(), "management").await;

        assert_eq!(analysis.themes.len(), 5);
    }

    #[tokio::test]
    async fn test_confidence_as_string_is_coerced() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(r#"{"sentiment": "negative", "confidence": "0.75"}"#),
            Ok(r#"{"themes": []}"#),
        ]));
        let analysis = analyzer(gateway).analyze(&long_text(), "management").await;

        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert_eq!(analysis.confidence, 0.75);
    }
}
