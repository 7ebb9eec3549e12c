//! Quiz model

use chrono::{DateTime, Utc};

use crate::entities::QuizEntity;

use super::{Identified, IssueModel, Lazy, PointModel, Ref};

/// Quiz domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizModel {
    pub id: Option<i32>,
    pub invite_code: String,
    pub code_expired: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub issue: Ref<IssueModel>,
    pub points: Lazy<Vec<PointModel>>,
}

impl Identified for QuizModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<QuizEntity> for QuizModel {
    fn from(entity: QuizEntity) -> Self {
        Self {
            id: entity.id,
            invite_code: entity.invite_code,
            code_expired: entity.code_expired,
            started_at: entity.started_at,
            finished_at: entity.finished_at,
            issue: Ref::from_id(entity.issue_id),
            points: Lazy::Unloaded,
        }
    }
}

impl From<&QuizModel> for QuizEntity {
    fn from(model: &QuizModel) -> Self {
        Self {
            id: model.id,
            invite_code: model.invite_code.clone(),
            code_expired: model.code_expired,
            started_at: model.started_at,
            finished_at: model.finished_at,
            issue_id: model.issue.id(),
        }
    }
}
