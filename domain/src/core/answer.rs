//! Answer value object

use serde::{Deserialize, Serialize};

/// Text generated by the model for a single question (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer {
    text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build an answer from raw model output, dropping surrounding whitespace.
    pub fn from_generated(raw: &str) -> Self {
        Self::new(raw.trim())
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
