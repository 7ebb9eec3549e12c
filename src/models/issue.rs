//! Issue model

use crate::entities::IssueEntity;

use super::{Identified, Lazy, QuizModel, Ref, SubjectModel};

/// Issue domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueModel {
    pub id: Option<i32>,
    pub name: String,
    pub subject: Ref<SubjectModel>,
    pub quizzes: Lazy<Vec<QuizModel>>,
}

impl Identified for IssueModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<IssueEntity> for IssueModel {
    fn from(entity: IssueEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            subject: Ref::from_id(entity.subject_id),
            quizzes: Lazy::Unloaded,
        }
    }
}

impl From<&IssueModel> for IssueEntity {
    fn from(model: &IssueModel) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            subject_id: model.subject.id(),
        }
    }
}
