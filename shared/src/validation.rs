//! Validation utilities for inventory inputs
//!
//! Plain checks return `Result<(), &'static str>`; the `*_rule` wrappers adapt
//! them to `validator` custom rules used by the `#[validate]` derives.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Minimum password length accepted at signup and password change
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum password length accepted at signup and password change
pub const MAX_PASSWORD_LEN: usize = 40;

// ============================================================================
// Plain checks
// ============================================================================

/// Largest price a `NUMERIC(12, 2)` column holds, in cents
pub const MAX_PRICE_CENTS: i64 = 999_999_999_999;

/// Validate that a price is not negative and fits the price columns
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    if price > Decimal::new(MAX_PRICE_CENTS, 2) {
        return Err("Price is too large");
    }
    Ok(())
}

/// Validate that a name has visible content
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be blank");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err("Password must be at most 40 characters");
    }
    Ok(())
}

// ============================================================================
// `validator` adapters
// ============================================================================

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn price_rule(price: &Decimal) -> Result<(), ValidationError> {
    validate_price(*price).map_err(|msg| rule_error("price", msg))
}

pub fn name_rule(name: &str) -> Result<(), ValidationError> {
    validate_name(name).map_err(|msg| rule_error("name", msg))
}

pub fn password_rule(password: &str) -> Result<(), ValidationError> {
    validate_password(password).map_err(|msg| rule_error("password", msg))
}
