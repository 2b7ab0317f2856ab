//! Purchase recording

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{CreatePurchaseInput, Item, Purchase, Store};
use crate::repository::{Entity, Repository};

/// Purchase service
#[derive(Clone)]
pub struct PurchaseService {
    db: PgPool,
}

impl PurchaseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sale; the store and item must exist
    pub async fn record(&self, input: CreatePurchaseInput) -> AppResult<Purchase> {
        let mut tx = self.db.begin().await?;

        if !Repository::<Store>::exists_in(&mut tx, input.store_id).await? {
            return Err(AppError::not_found(<Store as Entity>::NAME));
        }
        if !Repository::<Item>::exists_in(&mut tx, input.item_id).await? {
            return Err(AppError::not_found(<Item as Entity>::NAME));
        }

        let purchase = Repository::<Purchase>::insert_in(&mut tx, &input).await?;
        tx.commit().await?;

        tracing::info!(
            purchase_id = purchase.id,
            store_id = input.store_id,
            item_id = input.item_id,
            quantity = purchase.quantity,
            "Purchase recorded"
        );

        Ok(purchase)
    }
}
