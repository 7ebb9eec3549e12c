//! Answer model

use crate::entities::AnswerEntity;

use super::{Identified, QuestionModel, Ref};

/// Answer domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerModel {
    pub id: Option<i32>,
    pub txt: String,
    pub serial_number: i32,
    pub right: bool,
    pub question: Ref<QuestionModel>,
}

impl Identified for AnswerModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<AnswerEntity> for AnswerModel {
    fn from(entity: AnswerEntity) -> Self {
        Self {
            id: entity.id,
            txt: entity.txt,
            serial_number: entity.serial_number,
            right: entity.is_right,
            question: Ref::from_id(entity.question_id),
        }
    }
}

impl From<&AnswerModel> for AnswerEntity {
    fn from(model: &AnswerModel) -> Self {
        Self {
            id: model.id,
            txt: model.txt.clone(),
            serial_number: model.serial_number,
            is_right: model.right,
            question_id: model.question.id(),
        }
    }
}
