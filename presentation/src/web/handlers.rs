//! Request handlers for `/`

use super::{error::WebError, router::AppState};
use ask_application::AnswerQuestionInput;
use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::debug;

/// Body of the question form
#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub question: String,
}

/// `GET /`: empty form, no response
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    Ok(Html(state.renderer.render(None, None)?))
}

/// `POST /`: answer the submitted question.
///
/// A body without `question` is rejected by the `Form` extractor before
/// this runs.
pub async fn ask(
    State(state): State<AppState>,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, WebError> {
    let input = AnswerQuestionInput::new(form.question);
    let question = input.question.clone();

    let answer = state.use_case.execute(input).await?;
    debug!("Rendering answer ({} chars)", answer.text().len());

    Ok(Html(
        state
            .renderer
            .render(Some(&answer), Some(question.content()))?,
    ))
}
