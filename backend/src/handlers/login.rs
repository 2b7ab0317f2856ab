//! Login handlers

use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::models::User;
use crate::services::{auth::Token, AuthService};
use crate::AppState;

/// OAuth2 password-flow form; `username` carries the email
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Exchange email and password for an access token
pub async fn login_access_token(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, axum::extract::rejection::FormRejection>,
) -> AppResult<Json<Token>> {
    let Form(form) = form.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let auth_service = AuthService::new(state.db, &state.config);
    let token = auth_service.login(&form.username, &form.password).await?;

    Ok(Json(token))
}

/// Echo the user a token belongs to
pub async fn test_token(CurrentUser(current): CurrentUser) -> Json<User> {
    Json(current)
}
