//! Question entity

use sqlx::FromRow;

/// `questions` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct QuestionEntity {
    pub id: Option<i32>,
    pub text: String,
    pub question_type_id: Option<i32>,
    pub topic_id: Option<i32>,
}
