//! Warehouse and store stock handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use shared::types::ListResponse;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{Paged, ValidatedJson};
use crate::models::StockLine;
use crate::services::StockService;
use crate::AppState;

/// Receive items into a warehouse or store
pub async fn add_stock<S>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<S::New>,
) -> AppResult<Json<S>>
where
    S: StockLine + Serialize,
    S::New: DeserializeOwned + Validate,
{
    let row = StockService::<S>::new(state.db).add(input).await?;
    Ok(Json(row))
}

/// Stock rows of the container `container_id`
pub async fn list_stock<S>(
    State(state): State<AppState>,
    Path(container_id): Path<i32>,
    Paged(page): Paged,
) -> AppResult<Json<ListResponse<S>>>
where
    S: StockLine + Serialize,
{
    let rows = StockService::<S>::new(state.db)
        .list_by_container(container_id, page)
        .await?;
    Ok(Json(rows))
}
