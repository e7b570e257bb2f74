//! Ollama adapter
//!
//! Talks to a local Ollama server over its REST API:
//!
//! - `POST /api/chat` with `stream: false` for generation
//! - `GET /api/tags` to list locally pulled models

pub mod error;
pub mod gateway;
mod protocol;
