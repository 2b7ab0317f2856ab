//! Table mappings for items, warehouses, stores and purchases

use chrono::Utc;
use sqlx::{query_builder::Separated, Postgres};

use super::*;
use crate::repository::{Columns, Entity};

impl Columns for Item {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.name)
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price);
    }
}

impl Columns for CreateItemInput {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.name.trim())
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price);
    }
}

impl Entity for Item {
    const TABLE: &'static str = "items";
    const NAME: &'static str = "Item";
    const COLUMNS: &'static [&'static str] = &["name", "warehouse_price", "retail_price"];

    type New = CreateItemInput;
    type Update = UpdateItemInput;

    fn apply(&mut self, update: UpdateItemInput) {
        Item::apply(self, update)
    }
}

impl Columns for Warehouse {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.name).push_bind(&self.location);
    }
}

impl Columns for CreateWarehouseInput {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.name.trim()).push_bind(&self.location);
    }
}

impl Entity for Warehouse {
    const TABLE: &'static str = "warehouses";
    const NAME: &'static str = "Warehouse";
    const COLUMNS: &'static [&'static str] = &["name", "location"];

    type New = CreateWarehouseInput;
    type Update = UpdateWarehouseInput;

    fn apply(&mut self, update: UpdateWarehouseInput) {
        Warehouse::apply(self, update)
    }
}

impl Columns for Store {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.name).push_bind(&self.location);
    }
}

impl Columns for CreateStoreInput {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.name.trim()).push_bind(&self.location);
    }
}

impl Entity for Store {
    const TABLE: &'static str = "stores";
    const NAME: &'static str = "Store";
    const COLUMNS: &'static [&'static str] = &["name", "location"];

    type New = CreateStoreInput;
    type Update = UpdateStoreInput;

    fn apply(&mut self, update: UpdateStoreInput) {
        Store::apply(self, update)
    }
}

const PURCHASE_COLUMNS: &[&str] = &[
    "store_id",
    "item_id",
    "item_name",
    "warehouse_price",
    "retail_price",
    "quantity",
    "date",
];

impl Columns for Purchase {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.store_id)
            .push_bind(self.item_id)
            .push_bind(&self.item_name)
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price)
            .push_bind(self.quantity)
            .push_bind(self.date);
    }
}

impl Columns for CreatePurchaseInput {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.store_id)
            .push_bind(self.item_id)
            .push_bind(self.item_name.trim())
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price)
            .push_bind(self.quantity)
            .push_bind(self.date.unwrap_or_else(|| Utc::now().date_naive()));
    }
}

impl Entity for Purchase {
    const TABLE: &'static str = "purchases";
    const NAME: &'static str = "Purchase";
    const COLUMNS: &'static [&'static str] = PURCHASE_COLUMNS;

    type New = CreatePurchaseInput;
    type Update = UpdatePurchaseInput;

    fn apply(&mut self, update: UpdatePurchaseInput) {
        Purchase::apply(self, update)
    }
}
