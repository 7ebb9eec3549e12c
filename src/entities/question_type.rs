//! Question type entity

use sqlx::FromRow;

/// `question_types` row (seeded lookup table)
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct QuestionTypeEntity {
    pub id: Option<i32>,
    pub name: String,
}
