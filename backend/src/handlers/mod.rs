//! HTTP request handlers

pub mod crud;
pub mod health;
pub mod login;
pub mod purchase;
pub mod stock;
pub mod users;

pub use health::health_check;
pub use login::{login_access_token, test_token};
pub use purchase::create_purchase;
pub use stock::{add_stock, list_stock};
pub use users::{
    create_user, delete_me, delete_user, get_user, list_users, read_me, signup, update_me,
    update_password, update_user,
};
