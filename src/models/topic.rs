//! Topic model

use crate::entities::TopicEntity;

use super::{Identified, Lazy, QuestionModel, Ref, SubjectModel};

/// Topic domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopicModel {
    pub id: Option<i32>,
    pub name: String,
    pub subject: Ref<SubjectModel>,
    pub questions: Lazy<Vec<QuestionModel>>,
}

impl Identified for TopicModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<TopicEntity> for TopicModel {
    fn from(entity: TopicEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            subject: Ref::from_id(entity.subject_id),
            questions: Lazy::Unloaded,
        }
    }
}

impl From<&TopicModel> for TopicEntity {
    fn from(model: &TopicModel) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            subject_id: model.subject.id(),
        }
    }
}
