//! Request extractors that report failures as [`AppError`]

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use shared::types::Pagination;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that has been deserialized and checked with `validator`
///
/// Malformed bodies are rejected with 422, rule violations with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        value.validate().map_err(first_violation)?;

        Ok(ValidatedJson(value))
    }
}

/// Turn the first (by field name) rule violation into an [`AppError`]
pub fn first_violation(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().copied().collect();
    fields.sort_unstable();

    let Some(field) = fields.first().copied() else {
        return AppError::validation("body", "Invalid request body");
    };

    let message = field_errors[field]
        .first()
        .map(|e| match &e.message {
            Some(msg) => msg.to_string(),
            None => format!("Invalid value for {}", field),
        })
        .unwrap_or_else(|| format!("Invalid value for {}", field));

    AppError::validation(field, message)
}

/// `?skip=&limit=` query parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Paged(pub Pagination);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Paged
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(page) = Query::<Pagination>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
        Ok(Paged(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AddStoreStockInput;
    use rust_decimal::Decimal;

    #[test]
    fn test_first_violation_picks_sorted_field() {
        let input = AddStoreStockInput {
            store_id: 1,
            item_id: 1,
            item_name: " ".to_string(),
            warehouse_price: Decimal::ONE,
            retail_price: Decimal::ONE,
            quantity: 0,
        };
        let err = first_violation(input.validate().unwrap_err());
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "item_name"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
