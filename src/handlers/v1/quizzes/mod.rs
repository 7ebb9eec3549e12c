//! Quiz handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Quiz routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_quizzes)
                .post(handler::create_quiz)
                .put(handler::update_quiz),
        )
        .route("/{id}", get(handler::get_quiz).delete(handler::delete_quiz))
}
