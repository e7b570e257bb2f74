use super::{handlers, view::PageRenderer};
use ask_application::AnswerQuestionUseCase;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, immutable handles passed to every request
#[derive(Clone)]
pub struct AppState {
    pub use_case: AnswerQuestionUseCase,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(use_case: AnswerQuestionUseCase, renderer: PageRenderer) -> Self {
        Self {
            use_case,
            renderer: Arc::new(renderer),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::ask))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
