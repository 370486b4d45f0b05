//! Analyze Quarters use case
//!
//! Orchestrates the full pipeline: source the recent transcripts, analyze
//! both sections of each one in listing order, then derive tone deltas
//! across the sequence. Transcripts are processed strictly one at a time;
//! there is no parallel fan-out.

use crate::config::AnalysisParams;
use crate::ports::model_gateway::ModelGateway;
use crate::ports::transcript_source::{SourceError, TranscriptSource};
use crate::use_cases::analyze_section::SectionAnalyzer;
use calltone_domain::{QuarterResult, TranscriptRecord, apply_tone_changes, builtin_transcripts};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can escape the pipeline
#[derive(Error, Debug)]
pub enum AnalyzeQuartersError {
    /// The provider failed entirely and the built-in fallback is disabled.
    #[error("Transcript source failed: {0}")]
    Source(#[from] SourceError),
}

/// Use case for running the whole analysis pipeline
pub struct AnalyzeQuartersUseCase<S, G>
where
    S: TranscriptSource + 'static,
    G: ModelGateway + 'static,
{
    source: Arc<S>,
    analyzer: SectionAnalyzer<G>,
    params: AnalysisParams,
}

impl<S, G> AnalyzeQuartersUseCase<S, G>
where
    S: TranscriptSource + 'static,
    G: ModelGateway + 'static,
{
    pub fn new(source: Arc<S>, gateway: Arc<G>, params: AnalysisParams) -> Self {
        Self {
            source,
            analyzer: SectionAnalyzer::new(gateway, params.clone()),
            params,
        }
    }

    /// Run the pipeline and return per-quarter results in listing order.
    ///
    /// Per-section model failures never surface here; they degrade inside
    /// the analyzer. Only a whole-provider failure is visible, and only
    /// when the fallback dataset is disabled.
    pub async fn execute(&self) -> Result<Vec<QuarterResult>, AnalyzeQuartersError> {
        let transcripts = self.source_transcripts().await?;
        info!("Analyzing {} transcripts", transcripts.len());

        let mut results = Vec::with_capacity(transcripts.len());
        for transcript in &transcripts {
            info!("Analyzing {}", transcript.quarter);
            let management = self
                .analyzer
                .analyze(&transcript.management, "management")
                .await;
            let qa = self.analyzer.analyze(&transcript.qa, "qa").await;

            results.push(QuarterResult::new(
                transcript.quarter.clone(),
                transcript.date.clone(),
                management,
                qa,
                transcript.content.clone(),
            ));
        }

        apply_tone_changes(&mut results);
        Ok(results)
    }

    async fn source_transcripts(&self) -> Result<Vec<TranscriptRecord>, AnalyzeQuartersError> {
        match self
            .source
            .recent_transcripts(self.params.transcript_limit)
            .await
        {
            Ok(transcripts) => Ok(transcripts),
            Err(e) if self.params.fallback_enabled => {
                warn!("Transcript source failed ({}), using built-in dataset", e);
                Ok(builtin_transcripts())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::document_fetcher::FetchError;
    use crate::ports::model_gateway::GatewayError;
    use async_trait::async_trait;

    /// Source yielding a fixed set of records, or a scripted failure.
    struct FixedSource {
        records: Option<Vec<TranscriptRecord>>,
    }

    #[async_trait]
    impl TranscriptSource for FixedSource {
        async fn recent_transcripts(
            &self,
            limit: usize,
        ) -> Result<Vec<TranscriptRecord>, SourceError> {
            match &self.records {
                Some(records) => Ok(records.iter().take(limit).cloned().collect()),
                None => Err(SourceError::Fetch(FetchError::Timeout(
                    "https://example.com/listing".to_string(),
                ))),
            }
        }
    }

    /// Gateway that always reports the same sentiment and no themes.
    struct ConstantGateway {
        sentiment: &'static str,
        confidence: f64,
    }

    #[async_trait]
    impl ModelGateway for ConstantGateway {
        async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
            if prompt.contains("strategic focuses") {
                Ok(r#"{"themes": ["theme"]}"#.to_string())
            } else {
                Ok(format!(
                    r#"{{"sentiment": "{}", "confidence": {}}}"#,
                    self.sentiment, self.confidence
                ))
            }
        }
    }

    fn record(quarter: &str, body: &str) -> TranscriptRecord {
        let content = format!("{} Operator: now questions. {}", body.repeat(5), body);
        TranscriptRecord::new(quarter, "2024-05-22", content)
    }

    fn use_case(
        records: Option<Vec<TranscriptRecord>>,
        params: AnalysisParams,
    ) -> AnalyzeQuartersUseCase<FixedSource, ConstantGateway> {
        AnalyzeQuartersUseCase::new(
            Arc::new(FixedSource { records }),
            Arc::new(ConstantGateway {
                sentiment: "positive",
                confidence: 0.8,
            }),
            params,
        )
    }

    #[tokio::test]
    async fn test_results_keep_listing_order_and_deltas() {
        let body = "Strong quarter with record revenue and broad demand. ";
        let records = vec![
            record("Q1 2025", body),
            record("Q4 2024", body),
            record("Q3 2024", body),
            record("Q2 2024", body),
        ];
        let results = use_case(Some(records), AnalysisParams::default())
            .execute()
            .await
            .unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].quarter, "Q1 2025");
        assert!(results[0].tone_change.is_none());
        for result in &results[1..] {
            // Same sentiment/confidence every quarter, so every delta is 0
            assert_eq!(result.tone_change, Some(0.0));
        }
    }

    #[tokio::test]
    async fn test_source_failure_uses_builtin_dataset() {
        let results = use_case(None, AnalysisParams::default())
            .execute()
            .await
            .unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].quarter, "Q1 2025");
        assert_eq!(results[3].quarter, "Q2 2024");
    }

    #[tokio::test]
    async fn test_source_failure_surfaces_when_fallback_disabled() {
        let params = AnalysisParams::default().with_fallback_enabled(false);
        let error = use_case(None, params).execute().await.unwrap_err();

        assert!(matches!(error, AnalyzeQuartersError::Source(_)));
    }

    #[tokio::test]
    async fn test_empty_qa_section_gets_default_analysis() {
        let body = "Management remarks long enough to analyze in detail, repeated. ";
        let records = vec![TranscriptRecord::new(
            "Q1 2025",
            "2024-05-22",
            body.repeat(5),
        )];
        let results = use_case(Some(records), AnalysisParams::default())
            .execute()
            .await
            .unwrap();

        assert_eq!(results[0].qa, calltone_domain::SectionAnalysis::default());
        assert_eq!(results[0].management.sentiment, calltone_domain::Sentiment::Positive);
    }
}
