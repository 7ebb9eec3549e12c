//! Question model

use crate::entities::QuestionEntity;

use super::{AnswerModel, Identified, Lazy, QuestionTypeModel, Ref, TopicModel};

/// Question domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionModel {
    pub id: Option<i32>,
    pub text: String,
    pub question_type: Ref<QuestionTypeModel>,
    pub topic: Ref<TopicModel>,
    pub answers: Lazy<Vec<AnswerModel>>,
}

impl Identified for QuestionModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<QuestionEntity> for QuestionModel {
    fn from(entity: QuestionEntity) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            question_type: Ref::from_id(entity.question_type_id),
            topic: Ref::from_id(entity.topic_id),
            answers: Lazy::Unloaded,
        }
    }
}

impl From<&QuestionModel> for QuestionEntity {
    fn from(model: &QuestionModel) -> Self {
        Self {
            id: model.id,
            text: model.text.clone(),
            question_type_id: model.question_type.id(),
            topic_id: model.topic.id(),
        }
    }
}
