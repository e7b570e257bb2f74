//! Question value object

use serde::{Deserialize, Serialize};

/// A question submitted by a user (Value Object)
///
/// Any string is accepted verbatim, including the empty string.
/// Nothing is trimmed, bounded or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
