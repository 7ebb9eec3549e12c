//! Subject entity

use sqlx::FromRow;

/// `subjects` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct SubjectEntity {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub user_id: Option<i32>,
}
