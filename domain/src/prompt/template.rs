//! Prompt template for answering a single question

use super::chat::Prompt;
use crate::core::question::Question;
use crate::session::entities::Message;

/// The fixed question-answering template
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction sent ahead of every question
    pub fn system() -> &'static str {
        "You are a helpful assistant."
    }

    /// User turn wrapping the question
    pub fn user(question: &str) -> String {
        format!("Question: {}", question)
    }

    /// Compose the full prompt for a question.
    ///
    /// The question is interpolated verbatim: no escaping, no trimming.
    pub fn compose(question: &Question) -> Prompt {
        Prompt::new(vec![
            Message::system(Self::system()),
            Message::user(Self::user(question.content())),
        ])
    }
}
