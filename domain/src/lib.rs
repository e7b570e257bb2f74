//! Domain layer for ollama-ask
//!
//! This crate contains the value objects and the prompt composer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: free text submitted by a user, taken verbatim
//! - **Answer**: the text a model produced for one question
//! - **Prompt**: the system + user turns sent to the backend

pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use self::core::{answer::Answer, error::DomainError, model::Model, question::Question};
pub use prompt::{Prompt, PromptTemplate};
pub use session::entities::{Message, Role};
