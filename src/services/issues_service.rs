//! Issues service

use crate::{
    db::mappers::IssuesMapper,
    entities::IssueEntity,
    models::{IssueModel, SubjectModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes issue models
    IssuesService(IssuesMapper) for IssueEntity => IssueModel
}

children_lookup! {
    IssuesService => IssueModel,
    find_by_subject / find_by_subject_with(subject: SubjectModel) via find_by_subject_id
}
