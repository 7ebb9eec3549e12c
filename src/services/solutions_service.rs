//! Solutions service

use crate::{
    db::mappers::SolutionsMapper,
    entities::SolutionEntity,
    models::{PointModel, SolutionModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes solution models
    SolutionsService(SolutionsMapper) for SolutionEntity => SolutionModel
}

children_lookup! {
    SolutionsService => SolutionModel,
    find_by_point / find_by_point_with(point: PointModel) via find_by_point_id
}
