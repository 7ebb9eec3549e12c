//! Quiz request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::handlers::v1::Identity;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuizzesQuery {
    pub issue_id: i32,
}

/// Create quiz request; the invite code is generated
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub id: Option<i32>,
    pub issue: Identity,
}

/// Update quiz request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizRequest {
    pub id: Option<i32>,

    #[serde(default)]
    pub code_expired: bool,

    pub started_at: Option<DateTime<Utc>>,

    pub finished_at: Option<DateTime<Utc>>,

    pub issue: Identity,
}
