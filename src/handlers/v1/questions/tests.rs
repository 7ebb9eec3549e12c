use axum::http::StatusCode;
use mockall::Sequence;
use serde_json::json;

use crate::{
    db::mappers::MockMappers,
    entities::{AnswerEntity, QuestionEntity, QuestionTypeEntity, SubjectEntity, TopicEntity},
    handlers::test_support::*,
};

/// Topic 3 in subject 2, owned by user 1
fn owned_topic(mappers: &mut MockMappers) {
    mappers.topics.expect_find().returning(|id| {
        Ok(Some(TopicEntity {
            id: Some(id),
            name: "Fractions".to_string(),
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

fn question_type(mappers: &mut MockMappers) {
    mappers.question_types.expect_find().returning(|id| {
        Ok(Some(QuestionTypeEntity {
            id: Some(id),
            name: "One of many".to_string(),
        }))
    });
}

#[tokio::test]
async fn test_create_saves_question_before_answers() {
    let mut mappers = MockMappers::default();
    owned_topic(&mut mappers);
    question_type(&mut mappers);

    let mut seq = Sequence::new();
    mappers
        .questions
        .expect_insert()
        .withf(|question| question.topic_id == Some(3) && question.question_type_id == Some(1))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|question| {
            question.id = Some(8);
            Ok(())
        });
    for (number, answer_id) in [(1, 20), (2, 21)] {
        mappers
            .answers
            .expect_insert()
            .withf(move |answer| answer.question_id == Some(8) && answer.serial_number == number)
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |answer| {
                answer.id = Some(answer_id);
                Ok(())
            });
    }

    let (status, body) = send(
        app(mappers),
        json(
            "POST",
            "/v1/questions",
            &bearer(1, false),
            json!({
                "text": "1/2 + 1/2?",
                "questionType": { "id": 1 },
                "topic": { "id": 3 },
                "answers": [
                    { "text": "1", "right": true, "number": 1 },
                    { "text": "2", "number": 2 },
                ],
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 8 }));
}

#[tokio::test]
async fn test_create_in_foreign_topic_is_forbidden() {
    let mut mappers = MockMappers::default();
    owned_topic(&mut mappers);
    mappers.questions.expect_insert().never();

    let (status, _) = send(
        app(mappers),
        json(
            "POST",
            "/v1/questions",
            &bearer(2, false),
            json!({ "text": "?", "questionType": { "id": 1 }, "topic": { "id": 3 } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_show_includes_answers() {
    let mut mappers = MockMappers::default();
    owned_topic(&mut mappers);
    question_type(&mut mappers);
    mappers.questions.expect_find().returning(|id| {
        Ok(Some(QuestionEntity {
            id: Some(id),
            text: "1/2 + 1/2?".to_string(),
            question_type_id: Some(1),
            topic_id: Some(3),
        }))
    });
    mappers
        .answers
        .expect_find_by_question_id()
        .withf(|question_id| *question_id == 8)
        .returning(|question_id| {
            Ok(vec![AnswerEntity {
                id: Some(20),
                txt: "1".to_string(),
                serial_number: 1,
                is_right: true,
                question_id: Some(question_id),
            }])
        });

    let (status, body) = send(app(mappers), get("/v1/questions/8", Some(&bearer(1, false)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 8,
            "text": "1/2 + 1/2?",
            "questionType": { "id": 1 },
            "topic": { "id": 3 },
            "answers": [{ "id": 20, "text": "1", "right": true, "number": 1 }],
        })
    );
}

#[tokio::test]
async fn test_show_missing_question() {
    let mut mappers = MockMappers::default();
    mappers.questions.expect_find().returning(|_| Ok(None));

    let (status, _) = send(app(mappers), get("/v1/questions/8", Some(&bearer(1, false)))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Question 8 in topic 3 with answers 20 and 21
fn stored_question(mappers: &mut MockMappers) {
    mappers.questions.expect_find().returning(|id| {
        Ok(Some(QuestionEntity {
            id: Some(id),
            text: "1/2 + 1/2?".to_string(),
            question_type_id: Some(1),
            topic_id: Some(3),
        }))
    });
    mappers
        .answers
        .expect_find_by_question_id()
        .returning(|question_id| {
            Ok([(20, "1"), (21, "2")]
                .into_iter()
                .enumerate()
                .map(|(index, (id, txt))| AnswerEntity {
                    id: Some(id),
                    txt: txt.to_string(),
                    serial_number: index as i32 + 1,
                    is_right: index == 0,
                    question_id: Some(question_id),
                })
                .collect())
        });
}

#[tokio::test]
async fn test_update_replaces_answers() {
    let mut mappers = MockMappers::default();
    owned_topic(&mut mappers);
    question_type(&mut mappers);
    stored_question(&mut mappers);

    let mut seq = Sequence::new();
    mappers
        .answers
        .expect_delete()
        .withf(|answer| answer.id == Some(21))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mappers
        .questions
        .expect_update()
        .withf(|question| question.id == Some(8) && question.text == "1/2 + 1/4?")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mappers
        .answers
        .expect_update()
        .withf(|answer| {
            answer.id == Some(20)
                && answer.txt == "3/4"
                && answer.is_right
                && answer.question_id == Some(8)
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    mappers
        .answers
        .expect_insert()
        .withf(|answer| answer.id.is_none() && answer.txt == "1" && answer.question_id == Some(8))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|answer| {
            answer.id = Some(22);
            Ok(())
        });

    let (status, body) = send(
        app(mappers),
        json(
            "PUT",
            "/v1/questions",
            &bearer(1, false),
            json!({
                "id": 8,
                "text": "1/2 + 1/4?",
                "questionType": { "id": 1 },
                "topic": { "id": 3 },
                "answers": [
                    { "id": 20, "text": "3/4", "right": true, "number": 1 },
                    { "text": "1", "number": 2 },
                ],
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["answers"],
        json!([
            { "id": 20, "text": "3/4", "right": true, "number": 1 },
            { "id": 22, "text": "1", "right": false, "number": 2 },
        ])
    );
}

#[tokio::test]
async fn test_update_with_foreign_answer_is_bad_request() {
    let mut mappers = MockMappers::default();
    owned_topic(&mut mappers);
    question_type(&mut mappers);
    stored_question(&mut mappers);
    mappers.answers.expect_delete().never();
    mappers.answers.expect_update().never();
    mappers.questions.expect_update().never();

    let (status, body) = send(
        app(mappers),
        json(
            "PUT",
            "/v1/questions",
            &bearer(1, false),
            json!({
                "id": 8,
                "text": "1/2 + 1/2?",
                "questionType": { "id": 1 },
                "topic": { "id": 3 },
                "answers": [{ "id": 99, "text": "1", "right": true, "number": 1 }],
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_update_of_foreign_question_is_forbidden() {
    let mut mappers = MockMappers::default();
    owned_topic(&mut mappers);
    question_type(&mut mappers);
    stored_question(&mut mappers);
    mappers.questions.expect_update().never();

    let (status, _) = send(
        app(mappers),
        json(
            "PUT",
            "/v1/questions",
            &bearer(2, false),
            json!({
                "id": 8,
                "text": "?",
                "questionType": { "id": 1 },
                "topic": { "id": 3 },
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
