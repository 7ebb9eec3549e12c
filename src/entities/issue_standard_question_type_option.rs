//! Issue standard question type option entity

use sqlx::FromRow;

/// `issue_standard_question_type_options` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct IssueStandardQuestionTypeOptionEntity {
    pub id: Option<i32>,
    pub question_type_id: Option<i32>,
    pub min_questions: Option<i32>,
    pub max_questions: Option<i32>,
    pub time_limit: Option<i32>,
    pub issue_standard_id: Option<i32>,
}
