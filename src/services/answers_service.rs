//! Answers service

use crate::{
    db::mappers::AnswersMapper,
    entities::AnswerEntity,
    models::{AnswerModel, QuestionModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes answer models
    AnswersService(AnswersMapper) for AnswerEntity => AnswerModel
}

children_lookup! {
    AnswersService => AnswerModel,
    find_by_question / find_by_question_with(question: QuestionModel) via find_by_question_id
}
