//! Quiz entity

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// `quizzes` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct QuizEntity {
    pub id: Option<i32>,
    pub invite_code: String,
    pub code_expired: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub issue_id: Option<i32>,
}
