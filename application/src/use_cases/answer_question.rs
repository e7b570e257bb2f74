//! Answer Question use case.
//!
//! Runs the single-shot pipeline behind the web form:
//!
//! ```text
//! Question ──compose_prompt──▶ Prompt ──LlmGateway::generate──▶ String ──extract_answer──▶ Answer
//! ```
//!
//! Each stage is a separate function so the pure ends can be tested
//! without a backend. There is no retry and no fallback model: whatever
//! the gateway reports is surfaced to the caller.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use ask_domain::{Answer, Model, Prompt, PromptTemplate, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while answering a question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerQuestionError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`AnswerQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    pub question: Question,
}

impl AnswerQuestionInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Use case for answering one question with the configured model.
#[derive(Clone)]
pub struct AnswerQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
}

impl AnswerQuestionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self { gateway, model }
    }

    /// Answer the question in `input`.
    pub async fn execute(
        &self,
        input: AnswerQuestionInput,
    ) -> Result<Answer, AnswerQuestionError> {
        info!("Answering question with {}", self.model);
        debug!("Question: {}", preview(input.question.content(), 100));

        let prompt = compose_prompt(&input.question);
        debug!("Prompt has {} messages", prompt.messages().len());

        let raw = self.gateway.generate(&self.model, &prompt).await?;
        let answer = extract_answer(&raw);

        debug!("Model returned {} chars", answer.text().len());
        Ok(answer)
    }

    /// Check whether the configured model is present on the backend.
    ///
    /// Only used for diagnostics; a missing model still fails per request.
    pub async fn model_available(&self) -> Result<bool, GatewayError> {
        let models = self.gateway.available_models().await?;
        Ok(models.iter().any(|m| m.matches(&self.model)))
    }
}

/// First stage: build the prompt for a question.
pub fn compose_prompt(question: &Question) -> Prompt {
    PromptTemplate::compose(question)
}

/// Last stage: turn raw generated text into an [`Answer`].
pub fn extract_answer(raw: &str) -> Answer {
    Answer::from_generated(raw)
}

fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
