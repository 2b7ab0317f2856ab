//! Authentication service: password hashing, login and access tokens

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::services::UserService;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt_secret: String,
    access_token_expiry: i64,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub exp: i64,
    pub iat: i64,
}

/// Access token returned by the login endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
        }
    }

    /// Authenticate with email and password and issue an access token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Token> {
        let user = self.authenticate(email, password).await?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }

        tracing::info!(user_id = user.id, "User logged in");

        self.issue_token(user.id)
    }

    /// Look up a user by email and check the password
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = UserService::new(self.db.clone())
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.hashed_password).await? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    pub fn issue_token(&self, user_id: i32) -> AppResult<Token> {
        let access_token = encode_token(&self.jwt_secret, user_id, self.access_token_expiry)?;

        Ok(Token {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Resolve a bearer token to an active user
    pub async fn current_user(&self, token: &str) -> AppResult<User> {
        let user_id = decode_token(&self.jwt_secret, token)?;

        let user = UserService::new(self.db.clone())
            .find(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }

        Ok(user)
    }
}

/// Sign an access token for `user_id` valid for `expiry` seconds
pub fn encode_token(secret: &str, user_id: i32, expiry: i64) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + Duration::seconds(expiry)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

/// Validate an access token and return the user id it was issued for
pub fn decode_token(secret: &str, token: &str) -> AppResult<i32> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AppError::Unauthorized(format!("Could not validate credentials: {}", e)))?;

    token_data
        .claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid user ID in token".to_string()))
}

/// Hash a password with bcrypt off the async runtime
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Check a password against a bcrypt hash off the async runtime
pub async fn verify_password(password: &str, hashed: &str) -> AppResult<bool> {
    let (password, hashed) = (password.to_owned(), hashed.to_owned());
    tokio::task::spawn_blocking(move || verify(password, &hashed))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))
}
