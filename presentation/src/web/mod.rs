//! Web front-end
//!
//! One route, `/`:
//!
//! - `GET` renders the question form with an empty response
//! - `POST` (form field `question`) answers the question and renders the result

pub mod error;
pub mod handlers;
pub mod router;
pub mod view;

pub use error::WebError;
pub use router::{AppState, create_router};
pub use view::PageRenderer;
