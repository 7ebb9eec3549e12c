//! Quizzes service

use crate::{
    db::mappers::QuizzesMapper,
    entities::QuizEntity,
    models::{IssueModel, QuizModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes quiz models
    QuizzesService(QuizzesMapper) for QuizEntity => QuizModel
}

children_lookup! {
    QuizzesService => QuizModel,
    /// List the quizzes of an issue
    find_by_issue / find_by_issue_with(issue: IssueModel) via find_by_issue_id
}
