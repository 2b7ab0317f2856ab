//! Stock containers: warehouses and stores

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A warehouse holding wholesale stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
    pub location: String,
}

/// A retail store holding stock for sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub location: String,
}

/// Input for creating a warehouse
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWarehouseInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub name: String,
    pub location: String,
}

/// Input for updating a warehouse
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWarehouseInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub name: Option<String>,
    pub location: Option<String>,
}

/// Input for creating a store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStoreInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub name: String,
    pub location: String,
}

/// Input for updating a store
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStoreInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub name: Option<String>,
    pub location: Option<String>,
}

impl Warehouse {
    pub fn apply(&mut self, update: UpdateWarehouseInput) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(location) = update.location {
            self.location = location;
        }
    }
}

impl Store {
    pub fn apply(&mut self, update: UpdateStoreInput) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(location) = update.location {
            self.location = location;
        }
    }
}
