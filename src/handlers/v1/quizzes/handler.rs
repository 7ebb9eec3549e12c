//! Quiz handler implementations

use axum::{extract::State, http::StatusCode};

use crate::{
    auth::AccessControlLayer,
    error::{AppError, AppResult},
    handlers::{
        access::{ensure_new, issue_for, quiz_for, require_id},
        extract::{Json, Path, Query},
        v1::Identity,
    },
    models::{QuizModel, Ref},
    options::QuizzesOptions,
    state::AppState,
    utils::generate_invite_code,
};

use super::{
    request::{CreateQuizRequest, ListQuizzesQuery, UpdateQuizRequest},
    response::QuizResponse,
};

/// List the quizzes of an issue
pub async fn list_quizzes(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Query(query): Query<ListQuizzesQuery>,
) -> AppResult<Json<Vec<QuizResponse>>> {
    let services = state.services();
    let issue = issue_for(services, &acl, query.issue_id).await?;

    let quizzes = services.quizzes().find_by_issue(&issue).await?;

    Ok(Json(quizzes.iter().map(QuizResponse::from).collect()))
}

/// Create a quiz with a fresh invite code
pub async fn create_quiz(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<CreateQuizRequest>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    ensure_new(payload.id)?;

    let services = state.services();
    let issue = issue_for(services, &acl, payload.issue.id).await?;

    let mut quiz = QuizModel {
        invite_code: generate_invite_code(),
        issue: Ref::loaded(issue),
        ..Default::default()
    };
    services.quizzes().save(&mut quiz).await?;

    let id = require_id(quiz.id)?;
    tracing::info!(quiz_id = id, issue_id = payload.issue.id, "Quiz created");

    Ok((StatusCode::CREATED, Json(Identity { id })))
}

/// Update the state of a quiz; the issue and invite code are fixed
pub async fn update_quiz(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<UpdateQuizRequest>,
) -> AppResult<Json<QuizResponse>> {
    let id = require_id(payload.id)?;

    let services = state.services();
    let mut quiz = quiz_for(services, &acl, id).await?;

    if quiz.issue.id() != Some(payload.issue.id) {
        return Err(AppError::InvalidInput(
            "A quiz cannot be moved to another issue".to_string(),
        ));
    }
    if let (Some(started_at), Some(finished_at)) = (payload.started_at, payload.finished_at) {
        if finished_at < started_at {
            return Err(AppError::InvalidInput(
                "A quiz cannot finish before it starts".to_string(),
            ));
        }
    }

    quiz.code_expired = payload.code_expired;
    quiz.started_at = payload.started_at;
    quiz.finished_at = payload.finished_at;

    services.quizzes().save(&mut quiz).await?;

    Ok(Json(QuizResponse::from(&quiz)))
}

/// Get a quiz
pub async fn get_quiz(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<QuizResponse>> {
    let quiz = quiz_for(state.services(), &acl, id).await?;
    Ok(Json(QuizResponse::from(&quiz)))
}

/// Delete a quiz with its points and their solutions
pub async fn delete_quiz(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let services = state.services();
    let quiz = quiz_for(services, &acl, id).await?;

    services
        .quizzes()
        .delete_with(&quiz, &QuizzesOptions::for_delete(services))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
