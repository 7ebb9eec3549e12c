//! Issue entity

use sqlx::FromRow;

/// `issues` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct IssueEntity {
    pub id: Option<i32>,
    pub name: String,
    pub subject_id: Option<i32>,
}
