//! Topic handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Topic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_topics)
                .post(handler::create_topic)
                .put(handler::update_topic),
        )
        .route("/{id}", get(handler::get_topic).delete(handler::delete_topic))
}

#[cfg(test)]
mod tests;
