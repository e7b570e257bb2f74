//! Errors surfaced by the web layer

use ask_application::AnswerQuestionError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Generic page sent for every server-side failure
pub const ERROR_PAGE: &str = include_str!("../../templates/error.html");

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Failed to answer question: {0}")]
    Answer(#[from] AnswerQuestionError),

    #[error("Failed to render page: {0}")]
    Render(#[from] tera::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (self.status(), Html(ERROR_PAGE)).into_response()
    }
}
