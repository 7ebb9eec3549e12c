//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by area: the
//! JSON API under `/v1`, the server-rendered personal area under
//! `/personal`, authentication and the health probe.

pub mod access;
pub mod auth;
pub mod extract;
pub mod health;
pub mod personal;
pub mod v1;

use axum::{Router, middleware};

use crate::{
    constants::{API_BASE_PATH, PERSONAL_BASE_PATH},
    middleware::logging_middleware,
    state::AppState,
};

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state.clone()))
        .nest(API_BASE_PATH, v1::routes(state.clone()))
        .nest(PERSONAL_BASE_PATH, personal::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
