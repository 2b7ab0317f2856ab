//! Table mapping for user accounts

use sqlx::{query_builder::Separated, Postgres};

use super::*;
use crate::repository::{Columns, Entity};

/// A user row ready for insert, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub full_name: Option<String>,
    pub hashed_password: String,
}

impl NewUser {
    pub fn from_input(input: CreateUserInput, hashed_password: String) -> Self {
        Self {
            email: input.email,
            is_active: input.is_active,
            is_superuser: input.is_superuser,
            full_name: input.full_name,
            hashed_password,
        }
    }
}

impl Columns for User {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.email)
            .push_bind(self.is_active)
            .push_bind(self.is_superuser)
            .push_bind(&self.full_name)
            .push_bind(&self.hashed_password);
    }
}

impl Columns for NewUser {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.email)
            .push_bind(self.is_active)
            .push_bind(self.is_superuser)
            .push_bind(&self.full_name)
            .push_bind(&self.hashed_password);
    }
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const NAME: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &[
        "email",
        "is_active",
        "is_superuser",
        "full_name",
        "hashed_password",
    ];

    type New = NewUser;
    type Update = UserChanges;

    fn apply(&mut self, changes: UserChanges) {
        User::apply(self, changes)
    }
}
