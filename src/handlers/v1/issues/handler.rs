//! Issue handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::AppResult,
    handlers::{
        access::{ensure_new, issue_for, require_id, subject_for},
        extract::{Json, Path, Query},
        v1::Identity,
    },
    models::{IssueModel, Ref},
    options::IssuesOptions,
    state::AppState,
};

use super::{
    request::{IssueRequest, ListIssuesQuery},
    response::IssueResponse,
};

/// List the issues of a subject
pub async fn list_issues(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Query(query): Query<ListIssuesQuery>,
) -> AppResult<Json<Vec<IssueResponse>>> {
    let services = state.services();
    let subject = subject_for(services, &acl, query.subject_id).await?;

    let issues = services.issues().find_by_subject(&subject).await?;

    Ok(Json(issues.iter().map(IssueResponse::from).collect()))
}

/// Create an issue of a subject
pub async fn create_issue(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<IssueRequest>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    ensure_new(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let subject = subject_for(services, &acl, payload.subject.id).await?;

    let mut issue = IssueModel {
        name: payload.name,
        subject: Ref::loaded(subject),
        ..Default::default()
    };
    services.issues().save(&mut issue).await?;

    Ok((StatusCode::CREATED, Json(Identity { id: require_id(issue.id)? })))
}

/// Rename an issue or move it to another accessible subject
pub async fn update_issue(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<IssueRequest>,
) -> AppResult<Json<IssueResponse>> {
    let id = require_id(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let mut issue = issue_for(services, &acl, id).await?;

    if issue.subject.id() != Some(payload.subject.id) {
        issue.subject = Ref::loaded(subject_for(services, &acl, payload.subject.id).await?);
    }
    issue.name = payload.name;

    services.issues().save(&mut issue).await?;

    Ok(Json(IssueResponse::from(&issue)))
}

/// Get an issue
pub async fn get_issue(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<IssueResponse>> {
    let issue = issue_for(state.services(), &acl, id).await?;
    Ok(Json(IssueResponse::from(&issue)))
}

/// Delete an issue with its quizzes
pub async fn delete_issue(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let services = state.services();
    let issue = issue_for(services, &acl, id).await?;

    services
        .issues()
        .delete_with(&issue, &IssuesOptions::for_delete(services))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
