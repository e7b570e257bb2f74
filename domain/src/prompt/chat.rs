//! Structured chat prompt

use crate::session::entities::Message;
use serde::{Deserialize, Serialize};

/// Ordered list of chat turns sent to the backend in one call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
