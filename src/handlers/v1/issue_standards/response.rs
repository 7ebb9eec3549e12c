//! Issue standard response DTOs

use serde::Serialize;

use crate::{
    handlers::v1::Identity,
    models::{
        IssueStandardModel, IssueStandardQuestionTypeOptionModel, IssueStandardTopicPriorityModel,
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPriorityResponse {
    pub id: Option<i32>,
    pub topic: Option<Identity>,
    pub is_preferable: bool,
}

impl From<&IssueStandardTopicPriorityModel> for TopicPriorityResponse {
    fn from(priority: &IssueStandardTopicPriorityModel) -> Self {
        Self {
            id: priority.id,
            topic: Identity::of(priority.topic.id()),
            is_preferable: priority.is_preferable,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTypeOptionResponse {
    pub id: Option<i32>,
    pub question_type: Option<Identity>,
    pub min_questions: Option<i32>,
    pub max_questions: Option<i32>,
    pub time_limit: Option<i32>,
}

impl From<&IssueStandardQuestionTypeOptionModel> for QuestionTypeOptionResponse {
    fn from(option: &IssueStandardQuestionTypeOptionModel) -> Self {
        Self {
            id: option.id,
            question_type: Identity::of(option.question_type.id()),
            min_questions: option.min_questions,
            max_questions: option.max_questions,
            time_limit: option.time_limit,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStandardResponse {
    pub id: Option<i32>,
    pub time_limit: Option<i32>,
    pub questions_number: Option<i32>,
    pub topic_priorities: Vec<TopicPriorityResponse>,
    pub question_type_options: Vec<QuestionTypeOptionResponse>,
    pub subject: Option<Identity>,
}

impl From<&IssueStandardModel> for IssueStandardResponse {
    fn from(issue_standard: &IssueStandardModel) -> Self {
        Self {
            id: issue_standard.id,
            time_limit: issue_standard.time_limit,
            questions_number: issue_standard.questions_number,
            topic_priorities: issue_standard
                .topic_priorities
                .as_slice()
                .iter()
                .map(TopicPriorityResponse::from)
                .collect(),
            question_type_options: issue_standard
                .question_type_options
                .as_slice()
                .iter()
                .map(QuestionTypeOptionResponse::from)
                .collect(),
            subject: Identity::of(issue_standard.subject.id()),
        }
    }
}
