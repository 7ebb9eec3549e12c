//! Question response DTOs

use serde::Serialize;

use crate::{
    handlers::v1::Identity,
    models::{AnswerModel, QuestionModel},
};

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: Option<i32>,
    pub text: String,
    pub right: bool,
    pub number: i32,
}

impl From<&AnswerModel> for AnswerResponse {
    fn from(answer: &AnswerModel) -> Self {
        Self {
            id: answer.id,
            text: answer.txt.clone(),
            right: answer.right,
            number: answer.serial_number,
        }
    }
}

/// Question representation; answers are present only when they were loaded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: Option<i32>,
    pub text: String,
    pub question_type: Option<Identity>,
    pub topic: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AnswerResponse>>,
}

impl From<&QuestionModel> for QuestionResponse {
    fn from(question: &QuestionModel) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
            question_type: Identity::of(question.question_type.id()),
            topic: Identity::of(question.topic.id()),
            answers: question
                .answers
                .get()
                .map(|answers| answers.iter().map(AnswerResponse::from).collect()),
        }
    }
}
