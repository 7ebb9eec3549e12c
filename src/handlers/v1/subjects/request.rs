//! Subject request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH},
    handlers::v1::Identity,
};

/// Query of the subject list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubjectsQuery {
    pub user_id: i32,
}

/// Create or update subject request
#[derive(Debug, Deserialize, Validate)]
pub struct SubjectRequest {
    /// Absent on create, required on update
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    pub user: Identity,
}
