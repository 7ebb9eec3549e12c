//! Question handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::{AppError, AppResult},
    handlers::{
        access::{ensure_new, question_for, require_id, take_stored, topic_for},
        extract::{Json, Path, Query},
        v1::Identity,
    },
    models::{AnswerModel, Lazy, QuestionModel, QuestionTypeModel, Ref},
    options::{AnswersOptions, QuestionsOptions},
    services::Services,
    state::AppState,
};

use super::{
    request::{AnswerRequest, ListQuestionsQuery, QuestionRequest},
    response::QuestionResponse,
};

async fn question_type(services: &Services, id: i32) -> AppResult<QuestionTypeModel> {
    services
        .question_types()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question type {id} not found")))
}

fn apply_answer(answer: &mut AnswerModel, request: AnswerRequest) {
    answer.txt = request.text;
    answer.right = request.right;
    answer.serial_number = request.number;
}

/// List the questions of a topic, without answers
pub async fn list_questions(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Query(query): Query<ListQuestionsQuery>,
) -> AppResult<Json<Vec<QuestionResponse>>> {
    let services = state.services();
    let topic = topic_for(services, &acl, query.topic_id).await?;

    let questions = services.questions().find_by_topic(&topic).await?;

    Ok(Json(questions.iter().map(QuestionResponse::from).collect()))
}

/// Create a question together with its answers
pub async fn create_question(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<QuestionRequest>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    ensure_new(payload.id)?;
    for answer in &payload.answers {
        ensure_new(answer.id)?;
    }
    payload.validate()?;

    let services = state.services();
    let topic = topic_for(services, &acl, payload.topic.id).await?;
    let question_type = question_type(services, payload.question_type.id).await?;

    let answers = payload
        .answers
        .into_iter()
        .map(|request| {
            let mut answer = AnswerModel::default();
            apply_answer(&mut answer, request);
            answer
        })
        .collect();

    let mut question = QuestionModel {
        text: payload.text,
        question_type: Ref::loaded(question_type),
        topic: Ref::loaded(topic),
        answers: Lazy::Loaded(answers),
        ..Default::default()
    };
    let options = QuestionsOptions::new(services).with_answers(AnswersOptions::new(services));
    services.questions().save_with(&mut question, &options).await?;

    let id = require_id(question.id)?;
    tracing::info!(question_id = id, topic_id = payload.topic.id, "Question created");

    Ok((StatusCode::CREATED, Json(Identity { id })))
}

/// Update a question and replace its answers.
///
/// Answers carrying an id are updated in place, answers without one are
/// inserted and stored answers missing from the request are deleted.
pub async fn update_question(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<QuestionRequest>,
) -> AppResult<Json<QuestionResponse>> {
    let id = require_id(payload.id)?;
    payload.validate()?;

    let services = state.services();
    let mut question = question_for(services, &acl, id).await?;

    if question.topic.id() != Some(payload.topic.id) {
        question.topic = Ref::loaded(topic_for(services, &acl, payload.topic.id).await?);
    }
    if question.question_type.id() != Some(payload.question_type.id) {
        question.question_type =
            Ref::loaded(question_type(services, payload.question_type.id).await?);
    }
    question.text = payload.text;

    let mut stored = question.answers.as_slice().to_vec();
    let mut answers = Vec::with_capacity(payload.answers.len());
    for request in payload.answers {
        let mut answer = take_stored(&mut stored, request.id, "Answer")?;
        apply_answer(&mut answer, request);
        answers.push(answer);
    }

    services.answers().delete_all(&stored).await?;

    question.answers = Lazy::Loaded(answers);
    let options = QuestionsOptions::new(services).with_answers(AnswersOptions::new(services));
    services.questions().save_with(&mut question, &options).await?;

    Ok(Json(QuestionResponse::from(&question)))
}

/// Get a question with its answers
pub async fn get_question(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<QuestionResponse>> {
    let question = question_for(state.services(), &acl, id).await?;
    Ok(Json(QuestionResponse::from(&question)))
}

/// Delete a question with its answers
pub async fn delete_question(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let services = state.services();
    let question = question_for(services, &acl, id).await?;

    services
        .questions()
        .delete_with(&question, &QuestionsOptions::for_delete(services))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
