//! Domain models for the inventory API
//!
//! Each entity comes with the input structs accepted by its endpoints:
//! `Create*Input` for inserts and `Update*Input` for partial updates.

mod item;
mod location;
mod purchase;
mod stock;
mod user;

pub use item::*;
pub use location::*;
pub use purchase::*;
pub use stock::*;
pub use user::*;
