//! Database models for the Inventory Management API
//!
//! Re-exports models from the shared crate and describes how each one maps
//! onto its table (see [`crate::repository::Entity`]).

mod catalog;
mod stock;
mod user;

pub use shared::models::*;
pub use stock::StockLine;
pub use user::NewUser;
