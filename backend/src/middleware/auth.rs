//! Authentication middleware
//!
//! Resolves the bearer token to a stored, active user and makes it available
//! to handlers through the [`CurrentUser`] extractor.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::AppError;
use crate::models::User;
use crate::services::AuthService;
use crate::AppState;

/// Authentication middleware that validates JWT access tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        return AppError::Unauthorized("Not authenticated".to_string()).into_response();
    };

    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let user = match auth_service.current_user(bearer.token()).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    request.extensions_mut().insert(CurrentUser(user));

    next.run(request).await
}

/// Extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Superuser guard for admin-only handlers
    pub fn require_superuser(&self) -> Result<(), AppError> {
        if self.0.is_superuser {
            Ok(())
        } else {
            Err(AppError::InsufficientPermissions)
        }
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_superuser: bool) -> CurrentUser {
        CurrentUser(User {
            id: 1,
            email: "admin@example.com".to_string(),
            is_active: true,
            is_superuser,
            full_name: None,
            hashed_password: String::new(),
        })
    }

    #[test]
    fn test_require_superuser() {
        assert!(user(true).require_superuser().is_ok());
        assert!(matches!(
            user(false).require_superuser(),
            Err(AppError::InsufficientPermissions)
        ));
    }
}
