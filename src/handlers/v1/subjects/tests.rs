use axum::http::StatusCode;
use serde_json::json;

use crate::{
    db::mappers::MockMappers,
    entities::{IssueStandardEntity, SubjectEntity},
    handlers::test_support::*,
};

fn subject_entity(id: i32, user_id: i32) -> SubjectEntity {
    SubjectEntity {
        id: Some(id),
        name: format!("test{id}"),
        description: format!("test description{id}"),
        user_id: Some(user_id),
    }
}

#[tokio::test]
async fn test_list_success() {
    let mut mappers = MockMappers::default();
    mappers
        .users
        .expect_find()
        .withf(|id| *id == 1)
        .returning(|id| Ok(Some(user_entity(id))));
    mappers
        .subjects
        .expect_find_by_user_id()
        .withf(|user_id| *user_id == 1)
        .times(1)
        .returning(|user_id| Ok((1..=3).map(|id| subject_entity(id, user_id)).collect()));

    let (status, body) = send(
        app(mappers),
        get("/v1/subjects?userId=1", Some(&bearer(1, false))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "test1", "description": "test description1", "user": { "id": 1 } },
            { "id": 2, "name": "test2", "description": "test description2", "user": { "id": 1 } },
            { "id": 3, "name": "test3", "description": "test description3", "user": { "id": 1 } },
        ])
    );
}

#[tokio::test]
async fn test_list_user_not_found() {
    let mut mappers = MockMappers::default();
    mappers.users.expect_find().returning(|_| Ok(None));

    let (status, body) = send(
        app(mappers),
        get("/v1/subjects?userId=1", Some(&bearer(1, false))),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_forbidden() {
    let mut mappers = MockMappers::default();
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));

    let (status, body) = send(
        app(mappers),
        get("/v1/subjects?userId=1", Some(&bearer(2, false))),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_list_requires_token() {
    let (status, _) = send(
        app(MockMappers::default()),
        get("/v1/subjects?userId=1", None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_lists_foreign_subjects() {
    let mut mappers = MockMappers::default();
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));
    mappers
        .subjects
        .expect_find_by_user_id()
        .returning(|_| Ok(Vec::new()));

    let (status, body) = send(
        app(mappers),
        get("/v1/subjects?userId=1", Some(&bearer(9, true))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_success() {
    let mut mappers = MockMappers::default();
    mappers
        .users
        .expect_find()
        .withf(|id| *id == 1)
        .returning(|id| Ok(Some(user_entity(id))));
    mappers
        .subjects
        .expect_insert()
        .withf(|subject| {
            subject.id.is_none()
                && subject.name == "test"
                && subject.description == "test"
                && subject.user_id == Some(1)
        })
        .times(1)
        .returning(|subject| {
            subject.id = Some(5);
            Ok(())
        });
    mappers
        .issue_standards
        .expect_insert()
        .withf(|issue_standard: &IssueStandardEntity| {
            issue_standard.subject_id == Some(5)
                && issue_standard.time_limit.is_none()
                && issue_standard.questions_number.is_none()
        })
        .times(1)
        .returning(|issue_standard| {
            issue_standard.id = Some(1);
            Ok(())
        });

    let (status, body) = send(
        app(mappers),
        json(
            "POST",
            "/v1/subjects",
            &bearer(1, false),
            json!({ "name": "test", "description": "test", "user": { "id": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 5 }));
}

#[tokio::test]
async fn test_create_with_identifier_is_bad_request() {
    let (status, body) = send(
        app(MockMappers::default()),
        json(
            "POST",
            "/v1/subjects",
            &bearer(1, false),
            json!({ "id": 1, "name": "test", "description": "test", "user": { "id": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_with_empty_name_reports_field() {
    let (status, body) = send(
        app(MockMappers::default()),
        json(
            "POST",
            "/v1/subjects",
            &bearer(1, false),
            json!({ "name": "", "user": { "id": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["details"].get("name").is_some());
}

#[tokio::test]
async fn test_create_with_malformed_body_is_bad_request() {
    let bodies = [
        json!({ "description": "test", "user": { "id": 1 } }),
        json!({ "name": "test", "user": {} }),
        json!({ "name": 5, "user": { "id": 1 } }),
    ];

    for body in bodies {
        let mut mappers = MockMappers::default();
        mappers.subjects.expect_insert().never();

        let (status, response) = send(
            app(mappers),
            json("POST", "/v1/subjects", &bearer(1, false), body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_create_with_form_body_is_bad_request() {
    let (status, body) = send(
        app(MockMappers::default()),
        form("/v1/subjects", &bearer(1, false), "subject=subject"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_query_and_path_are_bad_requests() {
    let (status, body) = send(
        app(MockMappers::default()),
        get("/v1/subjects?userId=abc", Some(&bearer(1, false))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, body) = send(
        app(MockMappers::default()),
        get("/v1/subjects/abc", Some(&bearer(1, false))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_create_forbidden() {
    let mut mappers = MockMappers::default();
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));
    mappers.subjects.expect_insert().never();

    let (status, _) = send(
        app(mappers),
        json(
            "POST",
            "/v1/subjects",
            &bearer(2, false),
            json!({ "name": "test", "description": "test", "user": { "id": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_show_success() {
    let mut mappers = MockMappers::default();
    mappers
        .subjects
        .expect_find()
        .withf(|id| *id == 1)
        .returning(|id| Ok(Some(subject_entity(id, 1))));
    mappers
        .users
        .expect_find()
        .withf(|id| *id == 1)
        .returning(|id| Ok(Some(user_entity(id))));

    let (status, body) = send(app(mappers), get("/v1/subjects/1", Some(&bearer(1, false)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "test1", "description": "test description1", "user": { "id": 1 } })
    );
}

#[tokio::test]
async fn test_show_not_found() {
    let mut mappers = MockMappers::default();
    mappers.subjects.expect_find().returning(|_| Ok(None));

    let (status, _) = send(app(mappers), get("/v1/subjects/1", Some(&bearer(1, false)))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_show_forbidden() {
    let mut mappers = MockMappers::default();
    mappers
        .subjects
        .expect_find()
        .returning(|id| Ok(Some(subject_entity(id, 1))));
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));

    let (status, _) = send(app(mappers), get("/v1/subjects/1", Some(&bearer(2, false)))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_requires_identifier() {
    let (status, _) = send(
        app(MockMappers::default()),
        json(
            "PUT",
            "/v1/subjects",
            &bearer(1, false),
            json!({ "name": "test", "user": { "id": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_success() {
    let mut mappers = MockMappers::default();
    mappers
        .subjects
        .expect_find()
        .returning(|id| Ok(Some(subject_entity(id, 1))));
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));
    mappers
        .subjects
        .expect_update()
        .withf(|subject| subject.id == Some(4) && subject.name == "renamed")
        .times(1)
        .returning(|_| Ok(()));
    mappers.subjects.expect_insert().never();

    let (status, body) = send(
        app(mappers),
        json(
            "PUT",
            "/v1/subjects",
            &bearer(1, false),
            json!({ "id": 4, "name": "renamed", "description": "", "user": { "id": 1 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "renamed");
}

#[tokio::test]
async fn test_delete_cascades_then_removes_subject() {
    let mut mappers = MockMappers::default();
    mappers
        .subjects
        .expect_find()
        .returning(|id| Ok(Some(subject_entity(id, 1))));
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));
    mappers
        .topics
        .expect_find_by_subject_id()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    mappers
        .issue_standards
        .expect_find_by_subject_id()
        .times(1)
        .returning(|_| Ok(None));
    mappers
        .issues
        .expect_find_by_subject_id()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    mappers
        .subjects
        .expect_delete()
        .withf(|subject| subject.id == Some(1))
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = send(
        app(mappers),
        json("DELETE", "/v1/subjects/1", &bearer(1, false), json!(null)),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);
}
