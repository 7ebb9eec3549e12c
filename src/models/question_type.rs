//! Question type model

use crate::entities::QuestionTypeEntity;

use super::Identified;

/// Question type domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionTypeModel {
    pub id: Option<i32>,
    pub name: String,
}

impl Identified for QuestionTypeModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<QuestionTypeEntity> for QuestionTypeModel {
    fn from(entity: QuestionTypeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
