//! Question request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_ANSWER_TEXT_LENGTH, MAX_QUESTION_TEXT_LENGTH},
    handlers::v1::Identity,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuestionsQuery {
    pub topic_id: i32,
}

/// Answer inside a question request
#[derive(Debug, Deserialize, Validate)]
pub struct AnswerRequest {
    /// Present for answers that already exist
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_ANSWER_TEXT_LENGTH))]
    pub text: String,

    #[serde(default)]
    pub right: bool,

    /// Position of the answer, used by ordering questions
    #[serde(default)]
    pub number: i32,
}

/// Create or update question request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_QUESTION_TEXT_LENGTH))]
    pub text: String,

    pub question_type: Identity,

    pub topic: Identity,

    #[serde(default)]
    #[validate(nested)]
    pub answers: Vec<AnswerRequest>,
}
