//! Subject handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::AppResult,
    handlers::{
        access::{ensure_new, require_id, subject_for, user_for},
        extract::{Json, Path, Query},
        v1::Identity,
    },
    models::{Lazy, Ref, SubjectModel},
    options::{IssueStandardsOptions, SubjectsOptions},
    state::AppState,
};

use super::{
    request::{ListSubjectsQuery, SubjectRequest},
    response::SubjectResponse,
};

/// List the subjects of a user
pub async fn list_subjects(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Query(query): Query<ListSubjectsQuery>,
) -> AppResult<Json<Vec<SubjectResponse>>> {
    let services = state.services();
    let user = user_for(services, &acl, query.user_id).await?;

    let subjects = services.subjects().find_by_user(&user).await?;

    Ok(Json(subjects.iter().map(SubjectResponse::from).collect()))
}

/// Create a subject together with its empty issue standard
pub async fn create_subject(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<SubjectRequest>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    ensure_new(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let user = user_for(services, &acl, payload.user.id).await?;

    let mut subject = SubjectModel {
        name: payload.name,
        description: payload.description,
        user: Ref::loaded(user),
        issue_standard: Lazy::Loaded(Some(Box::default())),
        ..Default::default()
    };
    let options = SubjectsOptions::new(services)
        .with_issue_standard(IssueStandardsOptions::new(services));
    services.subjects().save_with(&mut subject, &options).await?;

    let id = require_id(subject.id)?;
    tracing::info!(subject_id = id, user_id = payload.user.id, "Subject created");

    Ok((StatusCode::CREATED, Json(Identity { id })))
}

/// Update a subject; moving it to another user needs access to that user
pub async fn update_subject(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<SubjectRequest>,
) -> AppResult<Json<SubjectResponse>> {
    let id = require_id(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let mut subject = subject_for(services, &acl, id).await?;

    if subject.user.id() != Some(payload.user.id) {
        let user = user_for(services, &acl, payload.user.id).await?;
        subject.user = Ref::loaded(user);
    }
    subject.name = payload.name;
    subject.description = payload.description;

    services.subjects().save(&mut subject).await?;

    Ok(Json(SubjectResponse::from(&subject)))
}

/// Get a subject
pub async fn get_subject(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<SubjectResponse>> {
    let subject = subject_for(state.services(), &acl, id).await?;
    Ok(Json(SubjectResponse::from(&subject)))
}

/// Delete a subject and everything built on it
pub async fn delete_subject(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let services = state.services();
    let subject = subject_for(services, &acl, id).await?;

    services
        .subjects()
        .delete_with(&subject, &SubjectsOptions::for_delete(services))
        .await?;

    tracing::info!(subject_id = id, user_id = acl.user().id, "Subject deleted");
    Ok(StatusCode::NO_CONTENT)
}
