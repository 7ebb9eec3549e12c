use axum::http::StatusCode;
use serde_json::json;

use crate::{
    db::mappers::MockMappers,
    entities::{SubjectEntity, TopicEntity},
    handlers::test_support::*,
};

/// Subjects belong to user 1, except subject 7 which belongs to user 2
fn subjects(mappers: &mut MockMappers) {
    mappers.subjects.expect_find().returning(|id| {
        Ok(Some(SubjectEntity {
            id: Some(id),
            name: format!("Subject {id}"),
            description: String::new(),
            user_id: Some(if id == 7 { 2 } else { 1 }),
        }))
    });
    mappers
        .users
        .expect_find()
        .returning(|id| Ok(Some(user_entity(id))));
}

fn topic_entity(id: i32, subject_id: i32) -> TopicEntity {
    TopicEntity {
        id: Some(id),
        name: format!("Topic {id}"),
        subject_id: Some(subject_id),
    }
}

/// Topic 3 in subject 2
fn stored_topic(mappers: &mut MockMappers) {
    subjects(mappers);
    mappers
        .topics
        .expect_find()
        .withf(|id| *id == 3)
        .returning(|id| Ok(Some(topic_entity(id, 2))));
}

#[tokio::test]
async fn test_list_success() {
    let mut mappers = MockMappers::default();
    subjects(&mut mappers);
    mappers
        .topics
        .expect_find_by_subject_id()
        .withf(|subject_id| *subject_id == 2)
        .times(1)
        .returning(|subject_id| Ok(vec![topic_entity(3, subject_id), topic_entity(4, subject_id)]));

    let (status, body) = send(
        app(mappers),
        get("/v1/topics?subjectId=2", Some(&bearer(1, false))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 3, "name": "Topic 3", "subject": { "id": 2 } },
            { "id": 4, "name": "Topic 4", "subject": { "id": 2 } },
        ])
    );
}

#[tokio::test]
async fn test_list_of_foreign_subject_is_forbidden() {
    let mut mappers = MockMappers::default();
    subjects(&mut mappers);
    mappers.topics.expect_find_by_subject_id().never();

    let (status, body) = send(
        app(mappers),
        get("/v1/topics?subjectId=7", Some(&bearer(1, false))),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_list_without_subject_is_bad_request() {
    let (status, body) = send(
        app(MockMappers::default()),
        get("/v1/topics", Some(&bearer(1, false))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_show_success() {
    let mut mappers = MockMappers::default();
    stored_topic(&mut mappers);

    let (status, body) = send(app(mappers), get("/v1/topics/3", Some(&bearer(1, false)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 3, "name": "Topic 3", "subject": { "id": 2 } }));
}

#[tokio::test]
async fn test_admin_sees_any_topic() {
    let mut mappers = MockMappers::default();
    stored_topic(&mut mappers);

    let (status, _) = send(app(mappers), get("/v1/topics/3", Some(&bearer(5, true)))).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_show_foreign_topic_is_forbidden() {
    let mut mappers = MockMappers::default();
    stored_topic(&mut mappers);

    let (status, body) = send(app(mappers), get("/v1/topics/3", Some(&bearer(2, false)))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_show_missing_topic() {
    let mut mappers = MockMappers::default();
    mappers.topics.expect_find().returning(|_| Ok(None));

    let (status, body) = send(app(mappers), get("/v1/topics/3", Some(&bearer(1, false)))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_show_requires_token() {
    let (status, _) = send(app(MockMappers::default()), get("/v1/topics/3", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_success() {
    let mut mappers = MockMappers::default();
    subjects(&mut mappers);
    mappers
        .topics
        .expect_insert()
        .withf(|topic| topic.id.is_none() && topic.name == "Fractions" && topic.subject_id == Some(2))
        .times(1)
        .returning(|topic| {
            topic.id = Some(3);
            Ok(())
        });

    let (status, body) = send(
        app(mappers),
        json(
            "POST",
            "/v1/topics",
            &bearer(1, false),
            json!({ "name": "Fractions", "subject": { "id": 2 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 3 }));
}

#[tokio::test]
async fn test_move_to_foreign_subject_is_forbidden() {
    let mut mappers = MockMappers::default();
    stored_topic(&mut mappers);
    mappers.topics.expect_update().never();

    let (status, _) = send(
        app(mappers),
        json(
            "PUT",
            "/v1/topics",
            &bearer(1, false),
            json!({ "id": 3, "name": "Fractions", "subject": { "id": 7 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_success() {
    let mut mappers = MockMappers::default();
    stored_topic(&mut mappers);
    mappers
        .questions
        .expect_find_by_topic_id()
        .withf(|topic_id| *topic_id == 3)
        .returning(|_| Ok(Vec::new()));
    mappers
        .topics
        .expect_delete()
        .withf(|topic| topic.id == Some(3))
        .times(1)
        .returning(|_| Ok(()));

    let (status, _) = send(
        app(mappers),
        json("DELETE", "/v1/topics/3", &bearer(1, false), json!(null)),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}
