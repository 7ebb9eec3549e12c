//! Authentication response DTOs

use serde::Serialize;

use crate::handlers::v1::users::UserResponse;

/// Authentication token response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}
