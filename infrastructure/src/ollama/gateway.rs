//! Ollama LLM Gateway implementation

use super::error::{OllamaError, Result};
use super::protocol::{ChatRequest, ChatResponse, ErrorBody, TagsResponse};
use crate::config::FileOllamaConfig;
use ask_application::{GatewayError, LlmGateway};
use ask_domain::{Model, Prompt};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// LLM Gateway implementation for a local Ollama server
///
/// Holds one pooled [`reqwest::Client`]; construct it once and share it.
#[derive(Debug, Clone)]
pub struct OllamaLlmGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaLlmGateway {
    /// Create a gateway for the server at `base_url`
    pub fn new(base_url: impl Into<String>) -> std::result::Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ollama-ask/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a gateway from the `[ollama]` config section
    pub fn from_config(config: &FileOllamaConfig) -> std::result::Result<Self, GatewayError> {
        let gateway = Self::new(config.normalized_base_url())?;
        info!("OllamaLlmGateway initialized for {}", gateway.base_url);
        Ok(gateway)
    }

    /// Create a gateway with an existing client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn chat(&self, model: &Model, prompt: &Prompt) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest::new(model.as_str(), prompt);

        debug!("POST {} (model {})", url, model);
        let response = self.client.post(&url).json(&body).send().await?;
        let response = Self::check_status(response).await?;

        let data: ChatResponse = response.json().await?;
        data.message
            .map(|m| m.content)
            .ok_or(OllamaError::MissingMessage)
    }

    async fn tags(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let data: TagsResponse = response.json().await?;
        Ok(data.models.into_iter().map(|m| m.name).collect())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("Unknown").to_string()
                } else {
                    text
                }
            });

        warn!("Ollama returned {}: {}", status.as_u16(), message);
        Err(OllamaError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn generate(
        &self,
        model: &Model,
        prompt: &Prompt,
    ) -> std::result::Result<String, GatewayError> {
        Ok(self.chat(model, prompt).await?)
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        let names = self.tags().await?;
        Ok(names.into_iter().filter_map(|n| n.parse().ok()).collect())
    }
}
