//! Purchase (retail sale) records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A sale of an item at a store
///
/// `store_id` and `item_id` become `None` once the referenced store or item
/// is deleted; the copied name and prices are kept for history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Purchase {
    pub id: i32,
    pub store_id: Option<i32>,
    pub item_id: Option<i32>,
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub warehouse_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub retail_price: Decimal,
    pub quantity: i32,
    pub date: NaiveDate,
}

/// Input for recording a purchase
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePurchaseInput {
    pub store_id: i32,
    pub item_id: i32,
    #[validate(custom = "crate::validation::name_rule")]
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "crate::validation::price_rule")]
    pub warehouse_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "crate::validation::price_rule")]
    pub retail_price: Decimal,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    /// Defaults to the current date
    pub date: Option<NaiveDate>,
}

/// Input for correcting a purchase record
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePurchaseInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub item_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "crate::validation::price_rule")]
    pub warehouse_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "crate::validation::price_rule")]
    pub retail_price: Option<Decimal>,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,
    pub date: Option<NaiveDate>,
}

impl Purchase {
    pub fn apply(&mut self, update: UpdatePurchaseInput) {
        if let Some(name) = update.item_name {
            self.item_name = name.trim().to_string();
        }
        if let Some(price) = update.warehouse_price {
            self.warehouse_price = price;
        }
        if let Some(price) = update.retail_price {
            self.retail_price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_payload_parses() {
        let input: CreatePurchaseInput = serde_json::from_str(
            r#"{"item_id":1,"item_name":"Widget","quantity":2,"warehouse_price":1.5,
                "retail_price":3.25,"date":"2024-05-01","store_id":4}"#,
        )
        .unwrap();
        assert_eq!(input.store_id, 4);
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_corrected_name_is_trimmed() {
        let mut purchase = Purchase {
            id: 1,
            store_id: Some(4),
            item_id: Some(1),
            item_name: "Widget".to_string(),
            warehouse_price: Decimal::ONE,
            retail_price: Decimal::TWO,
            quantity: 2,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        purchase.apply(UpdatePurchaseInput {
            item_name: Some(" Widget XL ".to_string()),
            ..Default::default()
        });
        assert_eq!(purchase.item_name, "Widget XL");
        assert_eq!(purchase.quantity, 2);
    }

    #[test]
    fn test_date_is_optional() {
        let input: CreatePurchaseInput = serde_json::from_str(
            r#"{"item_id":1,"item_name":"Widget","quantity":2,"warehouse_price":1.0,
                "retail_price":3.0,"store_id":4}"#,
        )
        .unwrap();
        assert!(input.date.is_none());
    }
}
