//! Stock receipts and listings for warehouses and stores
//!
//! A receipt for a `(container, item)` pair that already has a row adds to
//! its quantity; otherwise a new row is created. Both cases are one
//! `INSERT ... ON CONFLICT DO UPDATE` statement against the
//! `UNIQUE (container_id, item_id)` constraint, so concurrent receipts for
//! the same pair never lose an increment.

use std::marker::PhantomData;

use shared::types::{ListResponse, Pagination};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{is_out_of_range, AppError, AppResult};
use crate::models::{Item, StockLine};
use crate::repository::{insert_statement, Columns, Entity, Filter, Repository};

/// Stock service, generic over warehouse and store stock
pub struct StockService<S> {
    db: PgPool,
    line: PhantomData<fn() -> S>,
}

impl<S> Clone for StockService<S> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            line: PhantomData,
        }
    }
}

/// Append the conflict clause that turns the insert into an increment
fn push_merge<S: StockLine>(query: &mut QueryBuilder<'_, Postgres>) {
    query
        .push(" ON CONFLICT (")
        .push(S::CONTAINER_COLUMN)
        .push(", item_id) DO UPDATE SET quantity = ")
        .push(S::TABLE)
        .push(".quantity + EXCLUDED.quantity RETURNING *");
}

impl<S: StockLine> StockService<S> {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            line: PhantomData,
        }
    }

    /// Receive `input.quantity` units of an item into a container
    ///
    /// Name and prices on an existing row are left as they are; only the
    /// quantity changes. A sum past `i32::MAX` is rejected as a `quantity`
    /// validation error and the row is left untouched.
    pub async fn add(&self, input: S::New) -> AppResult<S> {
        let (container_id, item_id) = S::placement(&input);
        let mut tx = self.db.begin().await?;

        if !Repository::<S::Container>::exists_in(&mut tx, container_id).await? {
            return Err(AppError::not_found(<S::Container as Entity>::NAME));
        }
        if !Repository::<Item>::exists_in(&mut tx, item_id).await? {
            return Err(AppError::not_found(<Item as Entity>::NAME));
        }

        let mut query = insert_statement::<S>();
        let mut values = query.separated(", ");
        input.bind_columns(&mut values);
        values.push_unseparated(")");
        push_merge::<S>(&mut query);

        let row = query
            .build_query_as::<S>()
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                if is_out_of_range(&err) {
                    AppError::validation("quantity", "Quantity would exceed the maximum stock level")
                } else {
                    err.into()
                }
            })?;
        tx.commit().await?;

        tracing::info!(
            table = S::TABLE,
            container_id,
            item_id,
            delta = S::delta(&input),
            "Stock received"
        );

        Ok(row)
    }

    /// Stock rows held by one container; an unknown container holds none
    pub async fn list_by_container(
        &self,
        container_id: i32,
        page: Pagination,
    ) -> AppResult<ListResponse<S>> {
        Repository::<S>::new(self.db.clone())
            .list(Some(Filter::eq(S::CONTAINER_COLUMN, container_id)), page)
            .await
    }
}
