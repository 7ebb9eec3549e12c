//! Authentication handler implementations

use axum::extract::State;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::{extract::Json, v1::users::UserResponse},
    middleware::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{request::LoginRequest, response::AuthResponse};

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, access_token, expires_in) = AuthService::login(
        state.services(),
        &state.config().jwt,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse::from(&user),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .services()
        .users()
        .find(auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(&user)))
}
