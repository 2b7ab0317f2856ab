//! Generic CRUD handlers
//!
//! Each handler is instantiated per entity in the router, e.g.
//! `get(crud::list::<Item>)`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use shared::types::{ListResponse, Message};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{Paged, ValidatedJson};
use crate::repository::{Entity, Repository};
use crate::AppState;

/// List a page of rows
pub async fn list<E>(
    State(state): State<AppState>,
    Paged(page): Paged,
) -> AppResult<Json<ListResponse<E>>>
where
    E: Entity + Serialize,
{
    let rows = Repository::<E>::new(state.db).list(None, page).await?;
    Ok(Json(rows))
}

/// Get one row by id
pub async fn get<E>(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<E>>
where
    E: Entity + Serialize,
{
    let row = Repository::<E>::new(state.db).get(id).await?;
    Ok(Json(row))
}

/// Insert a row
pub async fn create<E>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<E::New>,
) -> AppResult<(StatusCode, Json<E>)>
where
    E: Entity + Serialize,
    E::New: DeserializeOwned + Validate,
{
    let row = Repository::<E>::new(state.db).insert(&input).await?;
    tracing::info!(table = E::TABLE, "Created {} record", E::NAME);
    Ok((StatusCode::CREATED, Json(row)))
}

/// Partially update a row
pub async fn update<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<E::Update>,
) -> AppResult<Json<E>>
where
    E: Entity + Serialize,
    E::Update: DeserializeOwned + Validate,
{
    let row = Repository::<E>::new(state.db).update(id, input).await?;
    Ok(Json(row))
}

/// Delete a row
pub async fn delete<E>(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Message>>
where
    E: Entity,
{
    Repository::<E>::new(state.db).delete(id).await?;
    tracing::info!(table = E::TABLE, id, "Deleted {} record", E::NAME);
    Ok(Json(Message::deleted(E::NAME)))
}
