//! Solution entity

use sqlx::FromRow;

/// `solutions` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct SolutionEntity {
    pub id: Option<i32>,
    pub answer_id: Option<i32>,
    pub point_id: Option<i32>,
}
