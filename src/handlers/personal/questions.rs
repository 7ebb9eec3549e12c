//! Personal questions pages, nested under a topic

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use serde_json::json;
use validator::{Validate, ValidationErrors};

use crate::{
    auth::AccessControlLayer,
    error::{AppError, AppResult},
    handlers::{
        access::{authorized, topic_for},
        extract::{Form, Path},
    },
    models::{QuestionModel, QuestionTypeModel, Ref},
    options::QuestionsOptions,
    services::Services,
    state::AppState,
    utils::field_messages,
};

use super::forms::QuestionForm;

#[derive(Debug, Serialize)]
struct QuestionTypeOption {
    id: Option<i32>,
    name: String,
}

impl From<QuestionTypeModel> for QuestionTypeOption {
    fn from(question_type: QuestionTypeModel) -> Self {
        Self {
            id: question_type.id,
            name: question_type.name,
        }
    }
}

fn list_path(topic_id: i32) -> String {
    format!("/personal/topics/{topic_id}/questions/")
}

async fn question_types(services: &Services) -> AppResult<Vec<QuestionTypeOption>> {
    let question_types = services.question_types().find_all().await?;
    Ok(question_types.into_iter().map(QuestionTypeOption::from).collect())
}

async fn question_type(services: &Services, id: i32) -> AppResult<QuestionTypeModel> {
    services
        .question_types()
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question type {id} not found")))
}

/// Question of the current user that also belongs to `topic_id`
async fn owned_question(
    services: &Services,
    acl: &AccessControlLayer,
    topic_id: i32,
    question_id: i32,
) -> AppResult<QuestionModel> {
    let question = services
        .questions()
        .find_with(question_id, &QuestionsOptions::for_auth(services))
        .await?;
    let question = authorized(question, acl, "Question", question_id)?;

    if question.topic.id() != Some(topic_id) {
        return Err(AppError::Forbidden(format!(
            "Question {question_id} does not belong to topic {topic_id}"
        )));
    }
    Ok(question)
}

async fn form_page(
    state: &AppState,
    topic_id: i32,
    form: &QuestionForm,
    errors: Option<&ValidationErrors>,
) -> AppResult<Html<String>> {
    let (method_type, action) = match form.id {
        Some(id) => (
            "update",
            format!("/personal/topics/{topic_id}/questions/update/{id}/"),
        ),
        None => ("create", format!("/personal/topics/{topic_id}/questions/create/")),
    };

    state.views().render(
        "questions/form",
        &json!({
            "topicId": topic_id,
            "methodType": method_type,
            "action": action,
            "question": form,
            "questionTypes": question_types(state.services()).await?,
            "errors": errors.map(field_messages).unwrap_or_default(),
        }),
    )
}

pub async fn list(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(topic_id): Path<i32>,
) -> AppResult<Html<String>> {
    let services = state.services();
    let topic = topic_for(services, &acl, topic_id).await?;

    let questions = services.questions().find_by_topic(&topic).await?;
    let questions: Vec<QuestionForm> = questions.iter().map(QuestionForm::from).collect();

    state.views().render(
        "questions/list",
        &json!({ "topicId": topic_id, "questions": questions }),
    )
}

pub async fn read(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((topic_id, question_id)): Path<(i32, i32)>,
) -> AppResult<Html<String>> {
    let services = state.services();
    let question = owned_question(services, &acl, topic_id, question_id).await?;

    state.views().render(
        "questions/view",
        &json!({
            "topicId": topic_id,
            "question": QuestionForm::from(&question),
            "questionTypes": question_types(services).await?,
        }),
    )
}

pub async fn create(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(topic_id): Path<i32>,
) -> AppResult<Html<String>> {
    topic_for(state.services(), &acl, topic_id).await?;
    form_page(&state, topic_id, &QuestionForm::default(), None).await
}

pub async fn insert(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(topic_id): Path<i32>,
    Form(form): Form<QuestionForm>,
) -> AppResult<Response> {
    let services = state.services();
    let topic = topic_for(services, &acl, topic_id).await?;

    let form = QuestionForm { id: None, ..form };
    if let Err(errors) = form.validate() {
        return Ok(form_page(&state, topic_id, &form, Some(&errors))
            .await?
            .into_response());
    }

    let mut question = QuestionModel {
        text: form.text,
        question_type: Ref::loaded(question_type(services, form.question_type_id).await?),
        topic: Ref::loaded(topic),
        ..Default::default()
    };
    services.questions().save(&mut question).await?;

    Ok(Redirect::to(&list_path(topic_id)).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((topic_id, question_id)): Path<(i32, i32)>,
) -> AppResult<Html<String>> {
    let question = owned_question(state.services(), &acl, topic_id, question_id).await?;
    form_page(&state, topic_id, &QuestionForm::from(&question), None).await
}

pub async fn save(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((topic_id, question_id)): Path<(i32, i32)>,
    Form(form): Form<QuestionForm>,
) -> AppResult<Response> {
    let services = state.services();
    let mut question = owned_question(services, &acl, topic_id, question_id).await?;

    let form = QuestionForm {
        id: Some(question_id),
        ..form
    };
    if let Err(errors) = form.validate() {
        return Ok(form_page(&state, topic_id, &form, Some(&errors))
            .await?
            .into_response());
    }

    if question.question_type.id() != Some(form.question_type_id) {
        question.question_type = Ref::loaded(question_type(services, form.question_type_id).await?);
    }
    question.text = form.text;
    services.questions().save(&mut question).await?;

    Ok(Redirect::to(&list_path(topic_id)).into_response())
}

pub async fn delete_confirmation(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((topic_id, question_id)): Path<(i32, i32)>,
) -> AppResult<Html<String>> {
    owned_question(state.services(), &acl, topic_id, question_id).await?;

    state.views().render(
        "questions/delete",
        &json!({ "topicId": topic_id, "questionId": question_id }),
    )
}

/// Delete a question, cascading to its answers only when it has any
pub async fn delete(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((topic_id, question_id)): Path<(i32, i32)>,
) -> AppResult<Redirect> {
    let services = state.services();
    let question = owned_question(services, &acl, topic_id, question_id).await?;

    if services.answers().find_by_question(&question).await?.is_empty() {
        services.questions().delete(&question).await?;
    } else {
        services
            .questions()
            .delete_with(&question, &QuestionsOptions::for_delete(services))
            .await?;
    }

    Ok(Redirect::to(&list_path(topic_id)))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};
    use mockall::Sequence;
    use tower::ServiceExt;

    use crate::{
        db::mappers::MockMappers,
        entities::{AnswerEntity, QuestionEntity, SubjectEntity, TopicEntity},
        handlers::test_support::*,
    };

    fn owned_question(mappers: &mut MockMappers) {
        mappers.questions.expect_find().returning(|id| {
            Ok(Some(QuestionEntity {
                id: Some(id),
                text: "Define a vector".to_string(),
                question_type_id: Some(3),
                topic_id: Some(5),
            }))
        });
        mappers.topics.expect_find().returning(|id| {
            Ok(Some(TopicEntity {
                id: Some(id),
                name: "Vectors".to_string(),
                subject_id: Some(2),
            }))
        });
        mappers.subjects.expect_find().returning(|id| {
            Ok(Some(SubjectEntity {
                id: Some(id),
                name: "Math".to_string(),
                description: String::new(),
                user_id: Some(1),
            }))
        });
        mappers
            .users
            .expect_find()
            .returning(|id| Ok(Some(user_entity(id))));
    }

    fn answer(id: i32) -> AnswerEntity {
        AnswerEntity {
            id: Some(id),
            txt: format!("answer {id}"),
            serial_number: id,
            is_right: false,
            question_id: Some(9),
        }
    }

    #[tokio::test]
    async fn test_delete_without_answers_is_plain() {
        let mut mappers = MockMappers::default();
        owned_question(&mut mappers);
        mappers
            .answers
            .expect_find_by_question_id()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        mappers.answers.expect_delete().never();
        mappers
            .questions
            .expect_delete()
            .withf(|question| question.id == Some(9))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(mappers)
            .oneshot(form(
                "/personal/topics/5/questions/delete/9/",
                &bearer(1, false),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/personal/topics/5/questions/"
        );
    }

    #[tokio::test]
    async fn test_delete_with_answers_removes_them_first() {
        let mut mappers = MockMappers::default();
        owned_question(&mut mappers);
        mappers
            .answers
            .expect_find_by_question_id()
            .times(2)
            .returning(|_| Ok(vec![answer(1), answer(2)]));

        let mut seq = Sequence::new();
        mappers
            .answers
            .expect_delete()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mappers
            .questions
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let response = app(mappers)
            .oneshot(form(
                "/personal/topics/5/questions/delete/9/",
                &bearer(1, false),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_question_of_other_topic_is_forbidden() {
        let mut mappers = MockMappers::default();
        owned_question(&mut mappers);
        mappers.questions.expect_delete().never();

        let (status, _) = send_raw(
            app(mappers),
            form("/personal/topics/6/questions/delete/9/", &bearer(1, false), ""),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
