//! Infrastructure layer for ollama-ask
//!
//! This crate contains the adapter that implements the
//! [`LlmGateway`](ask_application::LlmGateway) port against a local Ollama
//! server, and the configuration loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, DEFAULT_BASE_URL, FileConfig, FileOllamaConfig,
    FileServerConfig, Severity,
};
pub use ollama::{error::OllamaError, gateway::OllamaLlmGateway};
