//! Issue standard entity

use sqlx::FromRow;

/// `issue_standards` row, at most one per subject
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct IssueStandardEntity {
    pub id: Option<i32>,
    /// Seconds, `None` means unlimited
    pub time_limit: Option<i32>,
    pub questions_number: Option<i32>,
    pub subject_id: Option<i32>,
}
