//! Issue handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Issue routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_issues)
                .post(handler::create_issue)
                .put(handler::update_issue),
        )
        .route("/{id}", get(handler::get_issue).delete(handler::delete_issue))
}
