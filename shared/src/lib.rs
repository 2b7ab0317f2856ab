//! Shared types and models for the Inventory Management API
//!
//! This crate contains the wire models shared between the backend and any
//! client of the HTTP API.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
