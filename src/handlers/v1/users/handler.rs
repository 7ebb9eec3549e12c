//! User handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    auth::AccessControlLayer,
    error::{AppError, AppResult},
    handlers::{
        access::{ensure_new, require_id, user_for},
        extract::{Json, Path},
        v1::Identity,
    },
    models::UserModel,
    options::UsersOptions,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{CreateUserRequest, UpdateUserRequest},
    response::UserResponse,
};

/// List all users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    acl: AccessControlLayer,
) -> AppResult<Json<Vec<UserResponse>>> {
    acl.require_admin()?;

    let users = state.services().users().find_all().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Create a user (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    acl.require_admin()?;
    ensure_new(payload.id)?;
    payload.validate()?;

    let mut user = UserModel {
        first_name: payload.first_name,
        last_name: payload.last_name,
        surname: payload.surname,
        email: payload.email,
        password: AuthService::hash_password(&payload.password)?,
        is_admin: payload.is_admin,
        state: payload.state,
        ..Default::default()
    };
    state.services().users().save(&mut user).await?;

    let id = require_id(user.id)?;
    tracing::info!(user_id = id, created_by = acl.user().id, "User created");

    Ok((StatusCode::CREATED, Json(Identity { id })))
}

/// Update a user; only administrators may change the role or state
pub async fn update_user(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let id = require_id(payload.id)?;
    payload.validate()?;

    let mut user = user_for(state.services(), &acl, id).await?;

    if !acl.user().is_admin && (payload.is_admin != user.is_admin || payload.state != user.state) {
        return Err(AppError::Forbidden(
            "Only administrators can change the role or state".to_string(),
        ));
    }

    user.first_name = payload.first_name;
    user.last_name = payload.last_name;
    user.surname = payload.surname;
    user.email = payload.email;
    user.is_admin = payload.is_admin;
    user.state = payload.state;
    if let Some(password) = payload.password.as_deref() {
        user.password = AuthService::hash_password(password)?;
    }

    state.services().users().save(&mut user).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// Get a user
pub async fn get_user(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = user_for(state.services(), &acl, id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// Delete a user with all of their subjects (admin only)
pub async fn delete_user(
    State(state): State<AppState>,
    acl: AccessControlLayer,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    acl.require_admin()?;

    let services = state.services();
    let user = user_for(services, &acl, id).await?;
    services
        .users()
        .delete_with(&user, &UsersOptions::for_delete(services))
        .await?;

    tracing::info!(user_id = id, deleted_by = acl.user().id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
