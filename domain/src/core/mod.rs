//! Core domain concepts.
//!
//! - [`question::Question`] — the user's question
//! - [`answer::Answer`] — the generated answer
//! - [`model::Model`] — the backend model name
//! - [`error::DomainError`] — domain-level errors

pub mod answer;
pub mod error;
pub mod model;
pub mod question;
