//! JSON API, version 1
//!
//! Every route requires a bearer token. Field names are camelCase and
//! relations are exchanged as `{ "id": .. }` identities.

pub mod issue_standards;
pub mod issues;
pub mod question_types;
pub mod questions;
pub mod quizzes;
pub mod subjects;
pub mod topics;
pub mod users;

use axum::{Router, middleware};
use serde::{Deserialize, Serialize};

use crate::{middleware::auth_middleware, state::AppState};

/// Reference to another resource by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i32,
}

impl Identity {
    /// Identity of a persisted model, if it has one
    pub fn of(id: Option<i32>) -> Option<Self> {
        id.map(|id| Self { id })
    }
}

/// API v1 routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/users", users::routes())
        .nest("/subjects", subjects::routes())
        .nest("/topics", topics::routes())
        .nest("/question_types", question_types::routes())
        .nest("/questions", questions::routes())
        .nest("/issue_standards", issue_standards::routes())
        .nest("/issues", issues::routes())
        .nest("/quizzes", quizzes::routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
