//! User account management

use shared::types::{ListResponse, Pagination};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{
    CreateUserInput, NewUser, RegisterUserInput, UpdateMeInput, UpdatePasswordInput,
    UpdateUserInput, User, UserChanges,
};
use crate::repository::Repository;
use crate::services::auth::{hash_password, verify_password};

/// User service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
    users: Repository<User>,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self {
            users: Repository::new(db.clone()),
            db,
        }
    }

    pub async fn list(&self, page: Pagination) -> AppResult<ListResponse<User>> {
        self.users.list(None, page).await
    }

    pub async fn find(&self, id: i32) -> AppResult<Option<User>> {
        self.users.find(id).await
    }

    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.users.get(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    /// Create a user with the given flags
    pub async fn create(&self, input: CreateUserInput) -> AppResult<User> {
        self.ensure_email_free(&input.email, None).await?;

        let hashed_password = hash_password(&input.password).await?;
        let user = self
            .users
            .insert(&NewUser::from_input(input, hashed_password))
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Open self-registration; never grants superuser rights
    pub async fn register(&self, input: RegisterUserInput) -> AppResult<User> {
        self.create(CreateUserInput {
            email: input.email,
            password: input.password,
            full_name: input.full_name,
            is_active: true,
            is_superuser: false,
        })
        .await
    }

    pub async fn update(&self, id: i32, input: UpdateUserInput) -> AppResult<User> {
        if let Some(email) = &input.email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        let (mut changes, password) = input.into_changes();
        if let Some(password) = password {
            changes.hashed_password = Some(hash_password(&password).await?);
        }

        self.users.update(id, changes).await
    }

    pub async fn update_me(&self, user: &User, input: UpdateMeInput) -> AppResult<User> {
        if let Some(email) = &input.email {
            self.ensure_email_free(email, Some(user.id)).await?;
        }

        self.users.update(user.id, input.into()).await
    }

    pub async fn change_password(&self, user: &User, input: UpdatePasswordInput) -> AppResult<()> {
        if !verify_password(&input.current_password, &user.hashed_password).await? {
            return Err(AppError::validation("current_password", "Incorrect password"));
        }
        if input.current_password == input.new_password {
            return Err(AppError::validation(
                "new_password",
                "New password cannot be the same as the current one",
            ));
        }

        let changes = UserChanges {
            hashed_password: Some(hash_password(&input.new_password).await?),
            ..Default::default()
        };
        self.users.update(user.id, changes).await?;

        tracing::info!(user_id = user.id, "Password changed");
        Ok(())
    }

    /// Delete a user on behalf of `actor`
    pub async fn delete(&self, actor: &User, id: i32) -> AppResult<()> {
        if actor.id == id && actor.is_superuser {
            return Err(AppError::Forbidden(
                "Super users are not allowed to delete themselves".to_string(),
            ));
        }

        self.users.delete(id).await?;

        tracing::info!(user_id = id, deleted_by = actor.id, "User deleted");
        Ok(())
    }

    /// Create the configured first superuser unless the email is taken
    pub async fn ensure_superuser(&self, email: &str, password: &str) -> AppResult<()> {
        if self.find_by_email(email).await?.is_some() {
            tracing::debug!("Initial superuser already present");
            return Ok(());
        }

        let user = self
            .create(CreateUserInput {
                email: email.to_string(),
                password: password.to_string(),
                full_name: None,
                is_active: true,
                is_superuser: true,
            })
            .await?;

        tracing::info!(user_id = user.id, "Initial superuser created");
        Ok(())
    }

    /// Reject an email already used by a user other than `except`
    async fn ensure_email_free(&self, email: &str, except: Option<i32>) -> AppResult<()> {
        match self.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != except => {
                Err(AppError::DuplicateEntry("email".to_string()))
            }
            _ => Ok(()),
        }
    }
}
