//! Application layer for ollama-ask
//!
//! This crate contains the question-answering use case and the port
//! it calls through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{GatewayError, LlmGateway};
pub use use_cases::answer_question::{
    AnswerQuestionError, AnswerQuestionInput, AnswerQuestionUseCase,
};
