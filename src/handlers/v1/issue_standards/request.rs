//! Issue standard request DTOs

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    constants::{MAX_QUESTIONS_NUMBER, MAX_TIME_LIMIT_SECONDS},
    handlers::v1::Identity,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStandardQuery {
    pub subject_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TopicPriorityRequest {
    pub id: Option<i32>,

    pub topic: Identity,

    #[serde(default)]
    pub is_preferable: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_question_bounds"))]
pub struct QuestionTypeOptionRequest {
    pub id: Option<i32>,

    pub question_type: Identity,

    #[validate(range(min = 0, max = MAX_QUESTIONS_NUMBER))]
    pub min_questions: Option<i32>,

    #[validate(range(min = 0, max = MAX_QUESTIONS_NUMBER))]
    pub max_questions: Option<i32>,

    /// Seconds
    #[validate(range(min = 1, max = MAX_TIME_LIMIT_SECONDS))]
    pub time_limit: Option<i32>,
}

fn validate_question_bounds(option: &QuestionTypeOptionRequest) -> Result<(), ValidationError> {
    match (option.min_questions, option.max_questions) {
        (Some(min), Some(max)) if min > max => Err(ValidationError::new("min_exceeds_max")),
        _ => Ok(()),
    }
}

/// Update issue standard request; the children listed replace the stored ones
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueStandardRequest {
    pub id: Option<i32>,

    /// Seconds
    #[validate(range(min = 1, max = MAX_TIME_LIMIT_SECONDS))]
    pub time_limit: Option<i32>,

    #[validate(range(min = 1, max = MAX_QUESTIONS_NUMBER))]
    pub questions_number: Option<i32>,

    #[serde(default)]
    #[validate(nested)]
    pub topic_priorities: Vec<TopicPriorityRequest>,

    #[serde(default)]
    #[validate(nested)]
    pub question_type_options: Vec<QuestionTypeOptionRequest>,

    pub subject: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(min: Option<i32>, max: Option<i32>) -> QuestionTypeOptionRequest {
        QuestionTypeOptionRequest {
            id: None,
            question_type: Identity { id: 1 },
            min_questions: min,
            max_questions: max,
            time_limit: None,
        }
    }

    #[test]
    fn test_bounds_must_be_ordered() {
        assert!(option(Some(2), Some(5)).validate().is_ok());
        assert!(option(Some(2), None).validate().is_ok());
        assert!(option(Some(6), Some(5)).validate().is_err());
    }
}
