//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation backend.

use ask_domain::{Model, Prompt};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Backend could not be reached at all
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model backend.
/// Implementations (adapters) live in the infrastructure layer and must be
/// reusable across requests without re-initialization.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt to `model` and return the generated text
    async fn generate(&self, model: &Model, prompt: &Prompt) -> Result<String, GatewayError>;

    /// Models the backend currently has available
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::ModelNotAvailable("gemma:2b".into());
        assert_eq!(err.to_string(), "Model not available: gemma:2b");
    }
}
