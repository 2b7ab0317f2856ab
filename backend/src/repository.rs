//! Generic persistence layer
//!
//! [`Repository<E>`] provides list/get/insert/update/delete for any table
//! described by an [`Entity`] implementation. Statements are assembled with
//! `sqlx::QueryBuilder`; table and column names come from the entity's
//! constants, values are always bound.

use std::marker::PhantomData;

use shared::types::{ListResponse, Pagination};
use sqlx::{
    postgres::PgRow, query_builder::Separated, FromRow, PgConnection, PgPool, Postgres,
    QueryBuilder,
};

use crate::error::{AppError, AppResult};

/// Bound values for a table's writable columns, in `Entity::COLUMNS` order
pub trait Columns {
    fn bind_columns<'args>(&'args self, row: &mut Separated<'_, 'args, Postgres, &'static str>);
}

/// A table with a serial `id` primary key
pub trait Entity: for<'r> FromRow<'r, PgRow> + Columns + Send + Sync + Unpin + 'static {
    /// Table name
    const TABLE: &'static str;

    /// Name used in messages, e.g. "Store" in "Store not found"
    const NAME: &'static str;

    /// Writable columns (everything except `id`)
    const COLUMNS: &'static [&'static str];

    /// Values for a new row
    type New: Columns + Send + Sync;

    /// Partial update merged into an existing row
    type Update: Send;

    fn apply(&mut self, update: Self::Update);
}

/// Equality filter on an integer column, e.g. `warehouse_id = 3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: i32,
}

impl Filter {
    pub fn eq(column: &'static str, value: i32) -> Self {
        Self { column, value }
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: Option<Filter>) {
    if let Some(filter) = filter {
        query
            .push(" WHERE ")
            .push(filter.column)
            .push(" = ")
            .push_bind(filter.value);
    }
}

/// `INSERT INTO <table> (<columns>) VALUES (` with the separator ready for binds
pub(crate) fn insert_statement<'args, E: Entity>() -> QueryBuilder<'args, Postgres> {
    let mut query = QueryBuilder::new("INSERT INTO ");
    query
        .push(E::TABLE)
        .push(" (")
        .push(E::COLUMNS.join(", "))
        .push(") VALUES (");
    query
}

/// Data access for one entity type
pub struct Repository<E> {
    db: PgPool,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Page of rows ordered by id, with the total number of matching rows
    pub async fn list(
        &self,
        filter: Option<Filter>,
        page: Pagination,
    ) -> AppResult<ListResponse<E>> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
        count_query.push(E::TABLE);
        push_filter(&mut count_query, filter);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.db)
            .await?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM ");
        query.push(E::TABLE);
        push_filter(&mut query, filter);
        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let rows = query.build_query_as::<E>().fetch_all(&self.db).await?;

        Ok(ListResponse::new(rows, count))
    }

    pub async fn find(&self, id: i32) -> AppResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", E::TABLE);
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row)
    }

    /// Fetch a row or fail with "<NAME> not found"
    pub async fn get(&self, id: i32) -> AppResult<E> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::NAME))
    }

    pub async fn insert(&self, new: &E::New) -> AppResult<E> {
        let mut conn = self.db.acquire().await?;
        Self::insert_in(&mut conn, new).await
    }

    /// Merge `update` into the stored row and write it back
    ///
    /// The row is locked for the duration of the read-merge-write, so
    /// concurrent updates of the same row are applied one after the other.
    pub async fn update(&self, id: i32, update: E::Update) -> AppResult<E> {
        let mut tx = self.db.begin().await?;

        let sql = format!("SELECT * FROM {} WHERE id = $1 FOR UPDATE", E::TABLE);
        let mut row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(E::NAME))?;

        row.apply(update);
        let updated = Self::write_in(&mut tx, id, &row).await?;

        tx.commit().await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(E::NAME));
        }

        Ok(())
    }

    pub(crate) async fn exists_in(conn: &mut PgConnection, id: i32) -> AppResult<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", E::TABLE);
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(conn)
            .await?;
        Ok(exists)
    }

    pub(crate) async fn insert_in(conn: &mut PgConnection, new: &E::New) -> AppResult<E> {
        let mut query = insert_statement::<E>();
        let mut values = query.separated(", ");
        new.bind_columns(&mut values);
        values.push_unseparated(") RETURNING *");

        let row = query.build_query_as::<E>().fetch_one(conn).await?;
        Ok(row)
    }

    async fn write_in(conn: &mut PgConnection, id: i32, row: &E) -> AppResult<E> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE ");
        query
            .push(E::TABLE)
            .push(" SET (")
            .push(E::COLUMNS.join(", "))
            .push(") = ROW(");
        let mut values = query.separated(", ");
        row.bind_columns(&mut values);
        values.push_unseparated(") WHERE id = ");
        query.push_bind(id).push(" RETURNING *");

        let updated = query.build_query_as::<E>().fetch_one(conn).await?;
        Ok(updated)
    }
}
