//! Prompt domain
//!
//! The fixed template and the structured prompt it produces.

mod chat;
mod template;

pub use chat::Prompt;
pub use template::PromptTemplate;
