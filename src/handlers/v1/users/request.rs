//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, user_states};

fn default_state() -> i32 {
    user_states::ACTIVE
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Must be absent, ids are assigned on insert
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub surname: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default = "default_state")]
    #[validate(range(min = user_states::DISABLED, max = user_states::ACTIVE))]
    pub state: i32,
}

/// Update user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub surname: String,

    #[validate(email)]
    pub email: String,

    /// Left unchanged when absent
    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: Option<String>,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default = "default_state")]
    #[validate(range(min = user_states::DISABLED, max = user_states::ACTIVE))]
    pub state: i32,
}
