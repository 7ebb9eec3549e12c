//! Topic request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, handlers::v1::Identity};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTopicsQuery {
    pub subject_id: i32,
}

/// Create or update topic request
#[derive(Debug, Deserialize, Validate)]
pub struct TopicRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    pub subject: Identity,
}
