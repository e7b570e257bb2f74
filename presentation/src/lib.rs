//! Presentation layer for ollama-ask
//!
//! This crate contains the web front-end (router, handler, HTML view)
//! and the command-line definition of the server binary.

pub mod cli;
pub mod web;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use web::{AppState, PageRenderer, WebError, create_router};
