//! Issue standard question type options service

use crate::{
    db::mappers::IssueStandardQuestionTypeOptionsMapper,
    entities::IssueStandardQuestionTypeOptionEntity,
    models::{IssueStandardModel, IssueStandardQuestionTypeOptionModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes question type option models
    IssueStandardQuestionTypeOptionsService(IssueStandardQuestionTypeOptionsMapper) for IssueStandardQuestionTypeOptionEntity => IssueStandardQuestionTypeOptionModel
}

children_lookup! {
    IssueStandardQuestionTypeOptionsService => IssueStandardQuestionTypeOptionModel,
    find_by_issue_standard / find_by_issue_standard_with(issue_standard: IssueStandardModel) via find_by_issue_standard_id
}
