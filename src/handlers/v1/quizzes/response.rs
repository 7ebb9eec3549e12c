//! Quiz response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{handlers::v1::Identity, models::QuizModel};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: Option<i32>,
    pub invite_code: String,
    pub code_expired: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub issue: Option<Identity>,
}

impl From<&QuizModel> for QuizResponse {
    fn from(quiz: &QuizModel) -> Self {
        Self {
            id: quiz.id,
            invite_code: quiz.invite_code.clone(),
            code_expired: quiz.code_expired,
            started_at: quiz.started_at,
            finished_at: quiz.finished_at,
            issue: Identity::of(quiz.issue.id()),
        }
    }
}
