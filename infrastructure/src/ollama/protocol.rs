//! Wire types for the Ollama REST API

use ask_domain::{Message, Prompt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for ChatMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a Prompt) -> Self {
        Self {
            model,
            messages: prompt.messages().iter().map(ChatMessage::from).collect(),
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagModel {
    pub name: String,
}

/// Body Ollama sends with non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
