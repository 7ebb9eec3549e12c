//! Answer entity

use sqlx::FromRow;

/// `answers` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct AnswerEntity {
    pub id: Option<i32>,
    pub txt: String,
    pub serial_number: i32,
    pub is_right: bool,
    pub question_id: Option<i32>,
}
