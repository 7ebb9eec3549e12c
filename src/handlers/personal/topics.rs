//! Personal topics pages, nested under a subject

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::json;
use validator::{Validate, ValidationErrors};

use crate::{
    auth::AccessControlLayer,
    error::{AppError, AppResult},
    handlers::{
        access::{subject_for, topic_for},
        extract::{Form, Path},
    },
    models::{Ref, TopicModel},
    options::TopicsOptions,
    services::Services,
    state::AppState,
    utils::field_messages,
};

use super::forms::TopicForm;

fn list_path(subject_id: i32) -> String {
    format!("/personal/subjects/{subject_id}/topics/")
}

/// Topic of the current user that also belongs to `subject_id`
async fn owned_topic(
    services: &Services,
    acl: &AccessControlLayer,
    subject_id: i32,
    topic_id: i32,
) -> AppResult<TopicModel> {
    let topic = topic_for(services, acl, topic_id).await?;
    if topic.subject.id() != Some(subject_id) {
        return Err(AppError::Forbidden(format!(
            "Topic {topic_id} does not belong to subject {subject_id}"
        )));
    }
    Ok(topic)
}

fn form_page(
    state: &AppState,
    subject_id: i32,
    form: &TopicForm,
    errors: Option<&ValidationErrors>,
) -> AppResult<Html<String>> {
    let (method_type, action) = match form.id {
        Some(id) => (
            "update",
            format!("/personal/subjects/{subject_id}/topics/update/{id}/"),
        ),
        None => (
            "create",
            format!("/personal/subjects/{subject_id}/topics/create/"),
        ),
    };

    state.views().render(
        "topics/form",
        &json!({
            "subjectId": subject_id,
            "methodType": method_type,
            "action": action,
            "topic": form,
            "errors": errors.map(field_messages).unwrap_or_default(),
        }),
    )
}

pub async fn list(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
) -> AppResult<Html<String>> {
    let services = state.services();
    let subject = subject_for(services, &acl, subject_id).await?;

    let topics = services.topics().find_by_subject(&subject).await?;
    let topics: Vec<TopicForm> = topics.iter().map(TopicForm::from).collect();

    state.views().render(
        "topics/list",
        &json!({ "subjectId": subject_id, "topics": topics }),
    )
}

pub async fn read(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((subject_id, topic_id)): Path<(i32, i32)>,
) -> AppResult<Html<String>> {
    let topic = owned_topic(state.services(), &acl, subject_id, topic_id).await?;

    state.views().render(
        "topics/view",
        &json!({ "subjectId": subject_id, "topic": TopicForm::from(&topic) }),
    )
}

pub async fn create(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
) -> AppResult<Html<String>> {
    subject_for(state.services(), &acl, subject_id).await?;
    form_page(&state, subject_id, &TopicForm::default(), None)
}

pub async fn insert(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
    Form(form): Form<TopicForm>,
) -> AppResult<Response> {
    let services = state.services();
    let subject = subject_for(services, &acl, subject_id).await?;

    let form = TopicForm { id: None, ..form };
    if let Err(errors) = form.validate() {
        return Ok(form_page(&state, subject_id, &form, Some(&errors))?.into_response());
    }

    let mut topic = TopicModel {
        name: form.name,
        subject: Ref::loaded(subject),
        ..Default::default()
    };
    services.topics().save(&mut topic).await?;

    Ok(Redirect::to(&list_path(subject_id)).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((subject_id, topic_id)): Path<(i32, i32)>,
) -> AppResult<Html<String>> {
    let topic = owned_topic(state.services(), &acl, subject_id, topic_id).await?;
    form_page(&state, subject_id, &TopicForm::from(&topic), None)
}

pub async fn save(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((subject_id, topic_id)): Path<(i32, i32)>,
    Form(form): Form<TopicForm>,
) -> AppResult<Response> {
    let services = state.services();
    let mut topic = owned_topic(services, &acl, subject_id, topic_id).await?;

    let form = TopicForm {
        id: Some(topic_id),
        ..form
    };
    if let Err(errors) = form.validate() {
        return Ok(form_page(&state, subject_id, &form, Some(&errors))?.into_response());
    }

    topic.name = form.name;
    services.topics().save(&mut topic).await?;

    Ok(Redirect::to(&list_path(subject_id)).into_response())
}

pub async fn delete_confirmation(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((subject_id, topic_id)): Path<(i32, i32)>,
) -> AppResult<Html<String>> {
    owned_topic(state.services(), &acl, subject_id, topic_id).await?;

    state.views().render(
        "topics/delete",
        &json!({ "subjectId": subject_id, "topicId": topic_id }),
    )
}

pub async fn delete(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path((subject_id, topic_id)): Path<(i32, i32)>,
) -> AppResult<Redirect> {
    let services = state.services();
    let topic = owned_topic(services, &acl, subject_id, topic_id).await?;

    services
        .topics()
        .delete_with(&topic, &TopicsOptions::for_delete(services))
        .await?;

    Ok(Redirect::to(&list_path(subject_id)))
}
