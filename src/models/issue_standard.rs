//! Issue standard model

use crate::entities::IssueStandardEntity;

use super::{
    Identified, IssueStandardQuestionTypeOptionModel, IssueStandardTopicPriorityModel, Lazy, Ref,
    SubjectModel,
};

/// Issue standard domain model: the template issues of a subject are built from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueStandardModel {
    pub id: Option<i32>,
    pub time_limit: Option<i32>,
    pub questions_number: Option<i32>,
    pub subject: Ref<SubjectModel>,
    pub topic_priorities: Lazy<Vec<IssueStandardTopicPriorityModel>>,
    pub question_type_options: Lazy<Vec<IssueStandardQuestionTypeOptionModel>>,
}

impl Identified for IssueStandardModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<IssueStandardEntity> for IssueStandardModel {
    fn from(entity: IssueStandardEntity) -> Self {
        Self {
            id: entity.id,
            time_limit: entity.time_limit,
            questions_number: entity.questions_number,
            subject: Ref::from_id(entity.subject_id),
            topic_priorities: Lazy::Unloaded,
            question_type_options: Lazy::Unloaded,
        }
    }
}

impl From<&IssueStandardModel> for IssueStandardEntity {
    fn from(model: &IssueStandardModel) -> Self {
        Self {
            id: model.id,
            time_limit: model.time_limit,
            questions_number: model.questions_number,
            subject_id: model.subject.id(),
        }
    }
}
