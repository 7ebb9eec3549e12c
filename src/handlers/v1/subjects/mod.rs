//! Subject handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Subject routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_subjects)
                .post(handler::create_subject)
                .put(handler::update_subject),
        )
        .route("/{id}", get(handler::get_subject).delete(handler::delete_subject))
}

#[cfg(test)]
mod tests;
