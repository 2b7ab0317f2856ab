//! User management handlers
//!
//! Everything here runs behind [`crate::middleware::auth_middleware`]
//! except `signup`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::types::{ListResponse, Message};

use crate::error::{AppError, AppResult};
use crate::extract::{Paged, ValidatedJson};
use crate::middleware::CurrentUser;
use crate::models::{
    CreateUserInput, RegisterUserInput, UpdateMeInput, UpdatePasswordInput, UpdateUserInput, User,
};
use crate::services::UserService;
use crate::AppState;

/// List users (superuser only)
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
    Paged(page): Paged,
) -> AppResult<Json<ListResponse<User>>> {
    current.require_superuser()?;
    let users = UserService::new(state.db).list(page).await?;
    Ok(Json(users))
}

/// Create a user (superuser only)
pub async fn create_user(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(input): ValidatedJson<CreateUserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    current.require_superuser()?;
    let user = UserService::new(state.db).create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user; users may read themselves, superusers anyone
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    if current.id == id {
        return Ok(Json(current));
    }
    if !current.is_superuser {
        return Err(AppError::InsufficientPermissions);
    }
    let user = UserService::new(state.db).get(id).await?;
    Ok(Json(user))
}

/// Update a user (superuser only)
pub async fn update_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<UpdateUserInput>,
) -> AppResult<Json<User>> {
    current.require_superuser()?;
    let user = UserService::new(state.db).update(id, input).await?;
    Ok(Json(user))
}

/// Delete a user (superuser only)
pub async fn delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Message>> {
    current.require_superuser()?;
    UserService::new(state.db).delete(&current.0, id).await?;
    Ok(Json(Message::deleted("User")))
}

pub async fn read_me(CurrentUser(current): CurrentUser) -> Json<User> {
    Json(current)
}

pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    ValidatedJson(input): ValidatedJson<UpdateMeInput>,
) -> AppResult<Json<User>> {
    let user = UserService::new(state.db).update_me(&current, input).await?;
    Ok(Json(user))
}

/// Delete one's own account; superusers may not
pub async fn delete_me(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
) -> AppResult<Json<Message>> {
    UserService::new(state.db).delete(&current, current.id).await?;
    Ok(Json(Message::deleted("User")))
}

pub async fn update_password(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    ValidatedJson(input): ValidatedJson<UpdatePasswordInput>,
) -> AppResult<Json<Message>> {
    UserService::new(state.db)
        .change_password(&current, input)
        .await?;
    Ok(Json(Message::new("Password updated successfully")))
}

/// Open registration
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterUserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = UserService::new(state.db).register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
