//! Issue standard question type option model

use crate::entities::IssueStandardQuestionTypeOptionEntity;

use super::{Identified, IssueStandardModel, QuestionTypeModel, Ref};

/// Per question type bounds applied when issues are generated
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueStandardQuestionTypeOptionModel {
    pub id: Option<i32>,
    pub question_type: Ref<QuestionTypeModel>,
    pub min_questions: Option<i32>,
    pub max_questions: Option<i32>,
    pub time_limit: Option<i32>,
    pub issue_standard: Ref<IssueStandardModel>,
}

impl Identified for IssueStandardQuestionTypeOptionModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<IssueStandardQuestionTypeOptionEntity> for IssueStandardQuestionTypeOptionModel {
    fn from(entity: IssueStandardQuestionTypeOptionEntity) -> Self {
        Self {
            id: entity.id,
            question_type: Ref::from_id(entity.question_type_id),
            min_questions: entity.min_questions,
            max_questions: entity.max_questions,
            time_limit: entity.time_limit,
            issue_standard: Ref::from_id(entity.issue_standard_id),
        }
    }
}

impl From<&IssueStandardQuestionTypeOptionModel> for IssueStandardQuestionTypeOptionEntity {
    fn from(model: &IssueStandardQuestionTypeOptionModel) -> Self {
        Self {
            id: model.id,
            question_type_id: model.question_type.id(),
            min_questions: model.min_questions,
            max_questions: model.max_questions,
            time_limit: model.time_limit,
            issue_standard_id: model.issue_standard.id(),
        }
    }
}
