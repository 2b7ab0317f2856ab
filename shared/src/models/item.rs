//! Item catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog item with its wholesale and retail prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub warehouse_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub retail_price: Decimal,
}

/// Input for creating an item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "crate::validation::price_rule")]
    pub warehouse_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "crate::validation::price_rule")]
    pub retail_price: Decimal,
}

/// Input for updating an item; omitted fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateItemInput {
    #[validate(custom = "crate::validation::name_rule")]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "crate::validation::price_rule")]
    pub warehouse_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "crate::validation::price_rule")]
    pub retail_price: Option<Decimal>,
}

impl Item {
    /// Merge the supplied fields of `update` into this item
    pub fn apply(&mut self, update: UpdateItemInput) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.warehouse_price {
            self.warehouse_price = price;
        }
        if let Some(price) = update.retail_price {
            self.retail_price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item {
            id: 1,
            name: "Widget".to_string(),
            warehouse_price: Decimal::new(100, 2),
            retail_price: Decimal::new(200, 2),
        }
    }

    #[test]
    fn test_partial_update_keeps_omitted_fields() {
        let mut item = widget();
        item.apply(UpdateItemInput {
            retail_price: Some(Decimal::new(250, 2)),
            ..Default::default()
        });

        assert_eq!(item.name, "Widget");
        assert_eq!(item.warehouse_price, Decimal::new(100, 2));
        assert_eq!(item.retail_price, Decimal::new(250, 2));
    }

    #[test]
    fn test_renamed_item_is_trimmed() {
        let mut item = widget();
        item.apply(UpdateItemInput {
            name: Some("  Gadget \t".to_string()),
            ..Default::default()
        });
        assert_eq!(item.name, "Gadget");
    }

    #[test]
    fn test_prices_are_json_numbers() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(json["warehouse_price"], serde_json::json!(1.0));
        assert_eq!(json["retail_price"], serde_json::json!(2.0));
    }

    #[test]
    fn test_update_input_accepts_missing_prices() {
        let input: UpdateItemInput = serde_json::from_str(r#"{"name":"Gadget"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Gadget"));
        assert!(input.warehouse_price.is_none());
    }

    #[test]
    fn test_negative_price_rejected() {
        let input = CreateItemInput {
            name: "Widget".to_string(),
            warehouse_price: Decimal::from(-1),
            retail_price: Decimal::from(2),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("warehouse_price"));
    }
}
