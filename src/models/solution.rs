//! Solution model

use crate::entities::SolutionEntity;

use super::{AnswerModel, Identified, PointModel, Ref};

/// An answer chosen for a point
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolutionModel {
    pub id: Option<i32>,
    pub answer: Ref<AnswerModel>,
    pub point: Ref<PointModel>,
}

impl Identified for SolutionModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<SolutionEntity> for SolutionModel {
    fn from(entity: SolutionEntity) -> Self {
        Self {
            id: entity.id,
            answer: Ref::from_id(entity.answer_id),
            point: Ref::from_id(entity.point_id),
        }
    }
}

impl From<&SolutionModel> for SolutionEntity {
    fn from(model: &SolutionModel) -> Self {
        Self {
            id: model.id,
            answer_id: model.answer.id(),
            point_id: model.point.id(),
        }
    }
}
