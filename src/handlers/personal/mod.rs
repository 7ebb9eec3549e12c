//! Personal area
//!
//! Server-rendered pages where a teacher manages their own subjects, topics
//! and questions. Writes redirect back to the list they came from; invalid
//! forms are rendered again with per-field messages.

pub mod forms;
pub mod questions;
pub mod subjects;
pub mod topics;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    auth::AccessControlLayer, middleware::auth_middleware, models::UserModel, state::AppState,
};

/// Model of the signed in user, identified but not loaded
fn current_user(acl: &AccessControlLayer) -> UserModel {
    UserModel {
        id: Some(acl.user().id),
        ..Default::default()
    }
}

/// Personal area routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/subjects", get(subjects::list))
        .route("/subjects/", get(subjects::list))
        .route("/subjects/create/", get(subjects::create).post(subjects::insert))
        .route(
            "/subjects/update/{subject_id}/",
            get(subjects::update).post(subjects::save),
        )
        .route("/subjects/delete/{subject_id}", get(subjects::delete_confirmation))
        .route("/subjects/delete/{subject_id}/", post(subjects::delete))
        .route("/subjects/{subject_id}", get(subjects::read))
        .route("/subjects/{subject_id}/topics", get(topics::list))
        .route("/subjects/{subject_id}/topics/", get(topics::list))
        .route(
            "/subjects/{subject_id}/topics/create/",
            get(topics::create).post(topics::insert),
        )
        .route(
            "/subjects/{subject_id}/topics/update/{topic_id}/",
            get(topics::update).post(topics::save),
        )
        .route(
            "/subjects/{subject_id}/topics/delete/{topic_id}",
            get(topics::delete_confirmation),
        )
        .route(
            "/subjects/{subject_id}/topics/delete/{topic_id}/",
            post(topics::delete),
        )
        .route("/subjects/{subject_id}/topics/{topic_id}", get(topics::read))
        .route("/topics/{topic_id}/questions", get(questions::list))
        .route("/topics/{topic_id}/questions/", get(questions::list))
        .route(
            "/topics/{topic_id}/questions/create/",
            get(questions::create).post(questions::insert),
        )
        .route(
            "/topics/{topic_id}/questions/update/{question_id}/",
            get(questions::update).post(questions::save),
        )
        .route(
            "/topics/{topic_id}/questions/delete/{question_id}",
            get(questions::delete_confirmation),
        )
        .route(
            "/topics/{topic_id}/questions/delete/{question_id}/",
            post(questions::delete),
        )
        .route("/topics/{topic_id}/questions/{question_id}", get(questions::read))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
