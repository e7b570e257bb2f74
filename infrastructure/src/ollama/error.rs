//! Error types for the Ollama adapter

use ask_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when communicating with an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Response has no message")]
    MissingMessage,
}

impl From<OllamaError> for GatewayError {
    fn from(error: OllamaError) -> Self {
        match error {
            OllamaError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OllamaError::Http(e) if e.is_decode() => GatewayError::InvalidResponse(e.to_string()),
            OllamaError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            // Ollama answers 404 for a model that has not been pulled
            OllamaError::Status {
                status: 404,
                message,
            } => GatewayError::ModelNotAvailable(message),
            e @ OllamaError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            e @ OllamaError::MissingMessage => GatewayError::InvalidResponse(e.to_string()),
        }
    }
}
