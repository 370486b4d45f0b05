//! OpenAI-compatible chat-completions gateway.
//!
//! Implements the [`ModelGateway`] port against any endpoint speaking the
//! OpenAI chat-completions protocol. Temperature is fixed low so repeated
//! analyses of the same section stay near-deterministic; the per-call
//! timeout and bounded retry live here, not in the use cases.

use async_trait::async_trait;
use calltone_application::ports::model_gateway::{GatewayError, ModelGateway};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Low temperature for reproducible scoring.
const TEMPERATURE: f32 = 0.1;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    content: String,
}

/// Chat-completions adapter for the model collaborator.
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    max_attempts: u32,
}

impl OpenAiGateway {
    /// Build a gateway.
    ///
    /// `base_url` is the API root (e.g. `https://api.openai.com/v1`);
    /// `max_attempts` bounds the retries per call, minimum 1.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        max_attempts: u32,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into().trim().to_string(),
            max_attempts: max_attempts.max(1),
        })
    }

    async fn try_complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "API error {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("response parse failed: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::RequestFailed("no choices in response".to_string()))
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let mut last_error = GatewayError::Other("no attempts made".to_string());

        for attempt in 1..=self.max_attempts {
            debug!(model = %self.model, attempt, "Calling chat completions");
            match self.try_complete(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!("Model call attempt {}/{} failed: {}", attempt, self.max_attempts, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str, attempts: u32) -> OpenAiGateway {
        OpenAiGateway::new(
            base_url,
            "gpt-4-turbo",
            "test-key",
            Duration::from_secs(5),
            attempts,
        )
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let gateway = gateway("https://api.openai.com/v1/", 3);
        assert_eq!(gateway.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_at_least_one_attempt() {
        let gateway = gateway("https://api.openai.com/v1", 0);
        assert_eq!(gateway.max_attempts, 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_exhausts_attempts() {
        // Nothing listens on the discard port; connection is refused fast
        let gateway = gateway("http://127.0.0.1:9", 2);
        let error = gateway.complete("prompt").await.unwrap_err();
        assert!(matches!(
            error,
            GatewayError::ConnectionError(_) | GatewayError::Timeout
        ));
    }
}
