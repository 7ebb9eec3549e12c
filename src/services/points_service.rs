//! Points service

use crate::{
    db::mappers::PointsMapper,
    entities::PointEntity,
    models::{PointModel, QuizModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes point models
    PointsService(PointsMapper) for PointEntity => PointModel
}

children_lookup! {
    PointsService => PointModel,
    find_by_quiz / find_by_quiz_with(quiz: QuizModel) via find_by_quiz_id
}
