//! Table mappings for warehouse and store stock rows

use sqlx::{query_builder::Separated, Postgres};

use super::*;
use crate::repository::{Columns, Entity};

/// A stock row kept per `(container, item)` pair
///
/// Implemented by [`WarehouseStock`] and [`StoreStock`]; the stock service
/// is generic over it.
pub trait StockLine: Entity {
    /// Table the container id refers to
    type Container: Entity;

    /// Column holding the container id
    const CONTAINER_COLUMN: &'static str;

    /// Container and item ids of an incoming receipt
    fn placement(input: &Self::New) -> (i32, i32);

    /// Quantity delta of an incoming receipt
    fn delta(input: &Self::New) -> i32;
}

const WAREHOUSE_STOCK_COLUMNS: &[&str] = &[
    "warehouse_id",
    "item_id",
    "item_name",
    "warehouse_price",
    "retail_price",
    "quantity",
];

const STORE_STOCK_COLUMNS: &[&str] = &[
    "store_id",
    "item_id",
    "item_name",
    "warehouse_price",
    "retail_price",
    "quantity",
];

impl Columns for WarehouseStock {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.warehouse_id)
            .push_bind(self.item_id)
            .push_bind(&self.item_name)
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price)
            .push_bind(self.quantity);
    }
}

impl Columns for AddWarehouseStockInput {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.warehouse_id)
            .push_bind(self.item_id)
            .push_bind(self.item_name.trim())
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price)
            .push_bind(self.quantity);
    }
}

impl Entity for WarehouseStock {
    const TABLE: &'static str = "warehouse_stock";
    const NAME: &'static str = "Warehouse item";
    const COLUMNS: &'static [&'static str] = WAREHOUSE_STOCK_COLUMNS;

    type New = AddWarehouseStockInput;
    type Update = UpdateStockInput;

    fn apply(&mut self, update: UpdateStockInput) {
        WarehouseStock::apply(self, update)
    }
}

impl StockLine for WarehouseStock {
    type Container = Warehouse;
    const CONTAINER_COLUMN: &'static str = "warehouse_id";

    fn placement(input: &AddWarehouseStockInput) -> (i32, i32) {
        (input.warehouse_id, input.item_id)
    }

    fn delta(input: &AddWarehouseStockInput) -> i32 {
        input.quantity
    }
}

impl Columns for StoreStock {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.store_id)
            .push_bind(self.item_id)
            .push_bind(&self.item_name)
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price)
            .push_bind(self.quantity);
    }
}

impl Columns for AddStoreStockInput {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(self.store_id)
            .push_bind(self.item_id)
            .push_bind(self.item_name.trim())
            .push_bind(self.warehouse_price)
            .push_bind(self.retail_price)
            .push_bind(self.quantity);
    }
}

impl Entity for StoreStock {
    const TABLE: &'static str = "store_stock";
    const NAME: &'static str = "Store item";
    const COLUMNS: &'static [&'static str] = STORE_STOCK_COLUMNS;

    type New = AddStoreStockInput;
    type Update = UpdateStockInput;

    fn apply(&mut self, update: UpdateStockInput) {
        StoreStock::apply(self, update)
    }
}

impl StockLine for StoreStock {
    type Container = Store;
    const CONTAINER_COLUMN: &'static str = "store_id";

    fn placement(input: &AddStoreStockInput) -> (i32, i32) {
        (input.store_id, input.item_id)
    }

    fn delta(input: &AddStoreStockInput) -> i32 {
        input.quantity
    }
}
