//! Issue standard handler implementations

use axum::extract::State;
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::{AppError, AppResult},
    handlers::{
        access::{issue_standard_for, require_id, subject_for, take_stored},
        extract::{Json, Path, Query},
    },
    models::{Lazy, Ref},
    options::{
        IssueStandardQuestionTypeOptionsOptions, IssueStandardTopicPrioritiesOptions,
        IssueStandardsOptions,
    },
    services::Services,
    state::AppState,
};

use super::{
    request::{IssueStandardQuery, IssueStandardRequest},
    response::IssueStandardResponse,
};

fn children_options(services: &Services) -> IssueStandardsOptions {
    IssueStandardsOptions::new(services)
        .with_topic_priorities(IssueStandardTopicPrioritiesOptions::new(services))
        .with_question_type_options(IssueStandardQuestionTypeOptionsOptions::new(services))
}

/// Get an issue standard with its priorities and question type options
pub async fn get_issue_standard(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<IssueStandardResponse>> {
    let issue_standard = issue_standard_for(state.services(), &acl, id).await?;
    Ok(Json(IssueStandardResponse::from(&issue_standard)))
}

/// Get the issue standard of a subject
pub async fn get_subject_issue_standard(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Query(query): Query<IssueStandardQuery>,
) -> AppResult<Json<IssueStandardResponse>> {
    let services = state.services();
    let subject = subject_for(services, &acl, query.subject_id).await?;

    let issue_standard = services
        .issue_standards()
        .find_by_subject_with(&subject, &children_options(services))
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Subject {} has no issue standard", query.subject_id))
        })?;

    Ok(Json(IssueStandardResponse::from(&issue_standard)))
}

/// Update an issue standard, replacing its priorities and question type options
pub async fn update_issue_standard(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<IssueStandardRequest>,
) -> AppResult<Json<IssueStandardResponse>> {
    let id = require_id(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let mut issue_standard = issue_standard_for(services, &acl, id).await?;
    let subject_id = issue_standard.subject.id();

    if subject_id != Some(payload.subject.id) {
        return Err(AppError::InvalidInput(
            "An issue standard cannot be moved to another subject".to_string(),
        ));
    }

    issue_standard.time_limit = payload.time_limit;
    issue_standard.questions_number = payload.questions_number;

    let mut stored_priorities = issue_standard.topic_priorities.as_slice().to_vec();
    let mut priorities = Vec::with_capacity(payload.topic_priorities.len());
    for request in payload.topic_priorities {
        let topic = services
            .topics()
            .find(request.topic.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", request.topic.id)))?;
        if topic.subject.id() != subject_id {
            return Err(AppError::InvalidInput(format!(
                "Topic {} belongs to another subject",
                request.topic.id
            )));
        }

        let mut priority = take_stored(&mut stored_priorities, request.id, "Topic priority")?;
        priority.topic = Ref::loaded(topic);
        priority.is_preferable = request.is_preferable;
        priorities.push(priority);
    }

    let mut stored_options = issue_standard.question_type_options.as_slice().to_vec();
    let mut options = Vec::with_capacity(payload.question_type_options.len());
    for request in payload.question_type_options {
        let question_type = services
            .question_types()
            .find(request.question_type.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question type {} not found", request.question_type.id))
            })?;

        let mut option = take_stored(&mut stored_options, request.id, "Question type option")?;
        option.question_type = Ref::loaded(question_type);
        option.min_questions = request.min_questions;
        option.max_questions = request.max_questions;
        option.time_limit = request.time_limit;
        options.push(option);
    }

    services.topic_priorities().delete_all(&stored_priorities).await?;
    services
        .question_type_options()
        .delete_all(&stored_options)
        .await?;

    issue_standard.topic_priorities = Lazy::Loaded(priorities);
    issue_standard.question_type_options = Lazy::Loaded(options);
    services
        .issue_standards()
        .save_with(&mut issue_standard, &children_options(services))
        .await?;

    tracing::info!(issue_standard_id = id, user_id = acl.user().id, "Issue standard updated");
    Ok(Json(IssueStandardResponse::from(&issue_standard)))
}
