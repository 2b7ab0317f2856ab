//! User account models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user account
///
/// The password hash is loaded from the database but never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub full_name: Option<String>,
    #[serde(skip)]
    pub hashed_password: String,
}

fn default_true() -> bool {
    true
}

/// Input for creating a user (administrators)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom = "crate::validation::password_rule")]
    pub password: String,
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Input for open self-registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom = "crate::validation::password_rule")]
    pub password: String,
    pub full_name: Option<String>,
}

/// Input for updating any user (administrators)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(custom = "crate::validation::password_rule")]
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}

/// Input for updating one's own profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMeInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Input for changing one's own password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordInput {
    pub current_password: String,
    #[validate(custom = "crate::validation::password_rule")]
    pub new_password: String,
}

/// Field changes applied to a stored user, with any new password already hashed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub hashed_password: Option<String>,
}

impl UpdateUserInput {
    /// Split off the plain-text password so it can be hashed by the caller
    pub fn into_changes(self) -> (UserChanges, Option<String>) {
        let changes = UserChanges {
            email: self.email,
            full_name: self.full_name,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
            hashed_password: None,
        };
        (changes, self.password)
    }
}

impl From<UpdateMeInput> for UserChanges {
    fn from(input: UpdateMeInput) -> Self {
        Self {
            email: input.email,
            full_name: input.full_name,
            ..Default::default()
        }
    }
}

impl User {
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(full_name) = changes.full_name {
            self.full_name = Some(full_name);
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
        if let Some(is_superuser) = changes.is_superuser {
            self.is_superuser = is_superuser;
        }
        if let Some(hash) = changes.hashed_password {
            self.hashed_password = hash;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: 1,
            email: "alice@example.com".to_string(),
            is_active: true,
            is_superuser: false,
            full_name: None,
            hashed_password: "$2b$12$hash".to_string(),
        }
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(alice()).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "alice@example.com");
    }

    #[test]
    fn test_create_defaults() {
        let input: CreateUserInput =
            serde_json::from_str(r#"{"email":"bob@example.com","password":"password1"}"#).unwrap();
        assert!(input.is_active);
        assert!(!input.is_superuser);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let input = RegisterUserInput {
            email: "not-an-email".to_string(),
            password: "password1".to_string(),
            full_name: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_into_changes_splits_password() {
        let (changes, password) = UpdateUserInput {
            full_name: Some("Alice A.".to_string()),
            password: Some("new-password".to_string()),
            ..Default::default()
        }
        .into_changes();

        assert_eq!(password.as_deref(), Some("new-password"));
        assert!(changes.hashed_password.is_none());

        let mut user = alice();
        user.apply(changes);
        assert_eq!(user.full_name.as_deref(), Some("Alice A."));
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.hashed_password, "$2b$12$hash");
    }
}
