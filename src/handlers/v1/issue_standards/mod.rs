//! Issue standard handlers
//!
//! Every subject owns exactly one issue standard, created together with the
//! subject. It can be read and updated but never created or deleted here.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Issue standard routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::get_subject_issue_standard).put(handler::update_issue_standard),
        )
        .route("/{id}", get(handler::get_issue_standard))
}
