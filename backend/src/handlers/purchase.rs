//! Purchase handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::models::{CreatePurchaseInput, Purchase};
use crate::services::PurchaseService;
use crate::AppState;

/// Record a purchase
pub async fn create_purchase(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePurchaseInput>,
) -> AppResult<(StatusCode, Json<Purchase>)> {
    let purchase = PurchaseService::new(state.db).record(input).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}
