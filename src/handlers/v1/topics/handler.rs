//! Topic handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::AppResult,
    handlers::{
        access::{ensure_new, require_id, subject_for, topic_for},
        extract::{Json, Path, Query},
        v1::Identity,
    },
    models::{Ref, TopicModel},
    options::TopicsOptions,
    state::AppState,
};

use super::{
    request::{ListTopicsQuery, TopicRequest},
    response::TopicResponse,
};

/// List the topics of a subject
pub async fn list_topics(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Query(query): Query<ListTopicsQuery>,
) -> AppResult<Json<Vec<TopicResponse>>> {
    let services = state.services();
    let subject = subject_for(services, &acl, query.subject_id).await?;

    let topics = services.topics().find_by_subject(&subject).await?;

    Ok(Json(topics.iter().map(TopicResponse::from).collect()))
}

/// Create a topic in a subject
pub async fn create_topic(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<TopicRequest>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    ensure_new(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let subject = subject_for(services, &acl, payload.subject.id).await?;

    let mut topic = TopicModel {
        name: payload.name,
        subject: Ref::loaded(subject),
        ..Default::default()
    };
    services.topics().save(&mut topic).await?;

    Ok((StatusCode::CREATED, Json(Identity { id: require_id(topic.id)? })))
}

/// Update a topic, possibly moving it to another accessible subject
pub async fn update_topic(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<TopicRequest>,
) -> AppResult<Json<TopicResponse>> {
    let id = require_id(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let mut topic = topic_for(services, &acl, id).await?;

    if topic.subject.id() != Some(payload.subject.id) {
        topic.subject = Ref::loaded(subject_for(services, &acl, payload.subject.id).await?);
    }
    topic.name = payload.name;

    services.topics().save(&mut topic).await?;

    Ok(Json(TopicResponse::from(&topic)))
}

/// Get a topic
pub async fn get_topic(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<TopicResponse>> {
    let topic = topic_for(state.services(), &acl, id).await?;
    Ok(Json(TopicResponse::from(&topic)))
}

/// Delete a topic with its questions
pub async fn delete_topic(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let services = state.services();
    let topic = topic_for(services, &acl, id).await?;

    services
        .topics()
        .delete_with(&topic, &TopicsOptions::for_delete(services))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
