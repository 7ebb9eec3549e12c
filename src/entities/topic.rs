//! Topic entity

use sqlx::FromRow;

/// `topics` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct TopicEntity {
    pub id: Option<i32>,
    pub name: String,
    pub subject_id: Option<i32>,
}
