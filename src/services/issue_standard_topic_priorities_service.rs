//! Issue standard topic priorities service

use crate::{
    db::mappers::IssueStandardTopicPrioritiesMapper,
    entities::IssueStandardTopicPriorityEntity,
    models::{IssueStandardModel, IssueStandardTopicPriorityModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes topic priority models
    IssueStandardTopicPrioritiesService(IssueStandardTopicPrioritiesMapper) for IssueStandardTopicPriorityEntity => IssueStandardTopicPriorityModel
}

children_lookup! {
    IssueStandardTopicPrioritiesService => IssueStandardTopicPriorityModel,
    find_by_issue_standard / find_by_issue_standard_with(issue_standard: IssueStandardModel) via find_by_issue_standard_id
}
