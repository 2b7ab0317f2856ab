//! Stock rows: quantity on hand of one item inside one warehouse or store
//!
//! Item name and prices are copied onto the row when it is first created and
//! are not kept in sync with the item catalog afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stock of one item in one warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct WarehouseStock {
    pub id: i32,
    pub warehouse_id: i32,
    pub item_id: i32,
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub warehouse_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub retail_price: Decimal,
    pub quantity: i32,
}

/// Stock of one item in one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StoreStock {
    pub id: i32,
    pub store_id: i32,
    pub item_id: i32,
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub warehouse_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub retail_price: Decimal,
    pub quantity: i32,
}

/// Input for receiving items into a warehouse
///
/// `quantity` is a delta added to any existing row for the same item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddWarehouseStockInput {
    pub warehouse_id: i32,
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
}

/// Input for shipping items into a store
///
/// `quantity` is a delta added to any existing row for the same item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddStoreStockInput {
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
}

/// Input for editing a stock row in place; `quantity` is absolute here
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStockInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub item_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "crate::validation::price_rule")]
    pub warehouse_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "crate::validation::price_rule")]
    pub retail_price: Option<Decimal>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
}

impl WarehouseStock {
    pub fn apply(&mut self, update: UpdateStockInput) {
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
    }
}

impl StoreStock {
    pub fn apply(&mut self, update: UpdateStockInput) {
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(quantity: i32) -> AddWarehouseStockInput {
        AddWarehouseStockInput {
            warehouse_id: 1,
            item_id: 1,
            item_name: "Widget".to_string(),
            warehouse_price: Decimal::ONE,
            retail_price: Decimal::TWO,
            quantity,
        }
    }

    #[test]
    fn test_delta_must_be_positive() {
        assert!(receipt(5).validate().is_ok());
        assert!(receipt(0).validate().is_err());

        let errors = receipt(-3).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_absolute_quantity_may_be_zero() {
        let update = UpdateStockInput {
            quantity: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let update = UpdateStockInput {
            quantity: Some(-1),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_receipt_parses_client_payload() {
        let input: AddWarehouseStockInput = serde_json::from_str(
            r#"{"warehouse_id":1,"item_id":1,"item_name":"Widget",
                "warehouse_price":1.0,"retail_price":2.0,"quantity":5}"#,
        )
        .unwrap();
        assert_eq!(input.quantity, 5);
        assert_eq!(input.retail_price, Decimal::TWO);
    }

    #[test]
    fn test_stock_update_sets_quantity() {
        let mut row = StoreStock {
            id: 7,
            store_id: 2,
            item_id: 1,
            item_name: "Widget".to_string(),
            warehouse_price: Decimal::ONE,
            retail_price: Decimal::TWO,
            quantity: 10,
        };
        row.apply(UpdateStockInput {
            quantity: Some(4),
            ..Default::default()
        });
        assert_eq!(row.quantity, 4);
        assert_eq!(row.item_name, "Widget");
    }

    #[test]
    fn test_stock_rename_is_trimmed() {
        let mut row = WarehouseStock {
            id: 1,
            warehouse_id: 1,
            item_id: 1,
            item_name: "Widget".to_string(),
            warehouse_price: Decimal::ONE,
            retail_price: Decimal::TWO,
            quantity: 3,
        };
        row.apply(UpdateStockInput {
            item_name: Some("  Sprocket  ".to_string()),
            ..Default::default()
        });
        assert_eq!(row.item_name, "Sprocket");
        assert_eq!(row.quantity, 3);
    }
}
