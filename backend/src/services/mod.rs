//! Business logic services for the Inventory Management API

pub mod auth;
pub mod purchase;
pub mod stock;
pub mod user;

pub use auth::AuthService;
pub use purchase::PurchaseService;
pub use stock::StockService;
pub use user::UserService;
