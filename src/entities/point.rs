//! Point entity

use sqlx::FromRow;

/// `points` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct PointEntity {
    pub id: Option<i32>,
    #[sqlx(rename = "type")]
    pub point_type: String,
    pub text: String,
    pub quiz_id: Option<i32>,
}
