//! Point model

use crate::entities::PointEntity;

use super::{Identified, Lazy, QuizModel, Ref, SolutionModel};

/// A question slot of a quiz
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointModel {
    pub id: Option<i32>,
    pub point_type: String,
    pub text: String,
    pub quiz: Ref<QuizModel>,
    pub solutions: Lazy<Vec<SolutionModel>>,
}

impl Identified for PointModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<PointEntity> for PointModel {
    fn from(entity: PointEntity) -> Self {
        Self {
            id: entity.id,
            point_type: entity.point_type,
            text: entity.text,
            quiz: Ref::from_id(entity.quiz_id),
            solutions: Lazy::Unloaded,
        }
    }
}

impl From<&PointModel> for PointEntity {
    fn from(model: &PointModel) -> Self {
        Self {
            id: model.id,
            point_type: model.point_type.clone(),
            text: model.text.clone(),
            quiz_id: model.quiz.id(),
        }
    }
}
