//! Model Gateway port
//!
//! Defines the interface for the language-model collaborator.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during model gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for language-model completions
///
/// The adapter owns the per-call timeout and bounded retry policy and is
/// expected to run at a fixed low temperature so repeated analyses of the
/// same section stay near-deterministic. Callers treat every error as
/// recoverable: a failed call degrades that sub-result to its defaults.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Submit a prompt and return the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
