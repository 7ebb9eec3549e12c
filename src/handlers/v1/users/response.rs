//! User response DTOs

use serde::Serialize;

use crate::models::UserModel;

/// User representation, never carries the password hash
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub surname: String,
    pub email: String,
    pub is_admin: bool,
    pub state: i32,
}

impl From<&UserModel> for UserResponse {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            state: user.state,
        }
    }
}
