//! Personal subjects pages

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::AppResult,
    handlers::{
        access::subject_for,
        extract::{Form, Path},
    },
    models::{Lazy, Ref, SubjectModel},
    options::{IssueStandardsOptions, SubjectsOptions},
    state::AppState,
    utils::field_messages,
};

use super::{current_user, forms::SubjectForm};

const LIST: &str = "/personal/subjects/";

fn form_page(
    state: &AppState,
    form: &SubjectForm,
    errors: Option<&validator::ValidationErrors>,
) -> AppResult<Html<String>> {
    let (method_type, action) = match form.id {
        Some(id) => ("update", format!("/personal/subjects/update/{id}/")),
        None => ("create", "/personal/subjects/create/".to_string()),
    };

    state.views().render(
        "subjects/form",
        &json!({
            "methodType": method_type,
            "action": action,
            "subject": form,
            "errors": errors.map(field_messages).unwrap_or_default(),
        }),
    )
}

pub async fn list(State(state): State<AppState>, acl: AccessControlLayer) -> AppResult<Html<String>> {
    let subjects = state
        .services()
        .subjects()
        .find_by_user(&current_user(&acl))
        .await?;

    let subjects: Vec<SubjectForm> = subjects.iter().map(SubjectForm::from).collect();
    state.views().render("subjects/list", &json!({ "subjects": subjects }))
}

pub async fn read(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
) -> AppResult<Html<String>> {
    let subject = subject_for(state.services(), &acl, subject_id).await?;

    state
        .views()
        .render("subjects/view", &json!({ "subject": SubjectForm::from(&subject) }))
}

pub async fn create(State(state): State<AppState>) -> AppResult<Html<String>> {
    form_page(&state, &SubjectForm::default(), None)
}

/// Create a subject owned by the current user, with its empty issue standard
pub async fn insert(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Form(form): Form<SubjectForm>,
) -> AppResult<Response> {
    let form = SubjectForm { id: None, ..form };
    if let Err(errors) = form.validate() {
        return Ok(form_page(&state, &form, Some(&errors))?.into_response());
    }

    let services = state.services();
    let mut subject = SubjectModel {
        user: Ref::empty(acl.user().id),
        issue_standard: Lazy::Loaded(Some(Box::default())),
        ..Default::default()
    };
    form.apply(&mut subject);

    let options = SubjectsOptions::new(services)
        .with_issue_standard(IssueStandardsOptions::new(services));
    services.subjects().save_with(&mut subject, &options).await?;

    Ok(Redirect::to(LIST).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
) -> AppResult<Html<String>> {
    let subject = subject_for(state.services(), &acl, subject_id).await?;
    form_page(&state, &SubjectForm::from(&subject), None)
}

pub async fn save(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
    Form(form): Form<SubjectForm>,
) -> AppResult<Response> {
    let services = state.services();
    let mut subject = subject_for(services, &acl, subject_id).await?;

    let form = SubjectForm {
        id: Some(subject_id),
        ..form
    };
    if let Err(errors) = form.validate() {
        return Ok(form_page(&state, &form, Some(&errors))?.into_response());
    }

    form.apply(&mut subject);
    services.subjects().save(&mut subject).await?;

    Ok(Redirect::to(LIST).into_response())
}

pub async fn delete_confirmation(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
) -> AppResult<Html<String>> {
    subject_for(state.services(), &acl, subject_id).await?;

    state
        .views()
        .render("subjects/delete", &json!({ "subjectId": subject_id }))
}

pub async fn delete(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(subject_id): Path<i32>,
) -> AppResult<Redirect> {
    let services = state.services();
    let subject = subject_for(services, &acl, subject_id).await?;

    services
        .subjects()
        .delete_with(&subject, &SubjectsOptions::for_delete(services))
        .await?;

    tracing::info!(subject_id, user_id = acl.user().id, "Subject deleted");
    Ok(Redirect::to(LIST))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};
    use tower::ServiceExt;

    use crate::{
        db::mappers::MockMappers,
        entities::SubjectEntity,
        handlers::test_support::*,
    };

    #[tokio::test]
    async fn test_list_shows_own_subjects() {
        let mut mappers = MockMappers::default();
        mappers
            .subjects
            .expect_find_by_user_id()
            .withf(|user_id| *user_id == 1)
            .returning(|user_id| {
                Ok(vec![SubjectEntity {
                    id: Some(6),
                    name: "Chemistry".to_string(),
                    description: "Organic".to_string(),
                    user_id: Some(user_id),
                }])
            });

        let (status, page) =
            send_raw(app(mappers), get("/personal/subjects", Some(&bearer(1, false)))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("Chemistry"));
        assert!(page.contains("/personal/subjects/6/topics/"));
    }

    #[tokio::test]
    async fn test_invalid_form_is_rendered_again() {
        let mut mappers = MockMappers::default();
        mappers.subjects.expect_insert().never();

        let (status, page) = send_raw(
            app(mappers),
            form("/personal/subjects/create/", &bearer(1, false), "name=&description=x"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("Name must not be empty"));
    }

    #[tokio::test]
    async fn test_insert_redirects_to_list() {
        let mut mappers = MockMappers::default();
        mappers
            .subjects
            .expect_insert()
            .withf(|subject| subject.name == "Biology" && subject.user_id == Some(1))
            .times(1)
            .returning(|subject| {
                subject.id = Some(7);
                Ok(())
            });
        mappers
            .issue_standards
            .expect_insert()
            .withf(|issue_standard| issue_standard.subject_id == Some(7))
            .times(1)
            .returning(|issue_standard| {
                issue_standard.id = Some(2);
                Ok(())
            });

        let response = app(mappers)
            .oneshot(form(
                "/personal/subjects/create/",
                &bearer(1, false),
                "name=Biology&description=Cells",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/personal/subjects/");
    }

    #[tokio::test]
    async fn test_pages_require_token() {
        let (status, _) = send_raw(
            app(MockMappers::default()),
            get("/personal/subjects/", None),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
