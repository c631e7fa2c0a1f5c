//! Merchant API endpoints (admin).

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Merchant, MerchantInput};
use crate::AppState;

/// GET /api/admin/merchants - List all merchants ordered by name.
///
/// Disabled merchants are included; only the public renderer hides them.
pub async fn list_merchants(State(state): State<AppState>) -> ApiResult<Vec<Merchant>> {
    let merchants = state.repo.list_merchants().await?;
    success(merchants)
}

/// GET /api/admin/merchants/:id - Get a single merchant for the edit form.
pub async fn get_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Merchant> {
    let merchant = state
        .repo
        .get_merchant(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Merchant {} not found", id)))?;
    success(merchant)
}

/// POST /api/admin/merchants - Create a new merchant.
pub async fn create_merchant(
    State(state): State<AppState>,
    Json(input): Json<MerchantInput>,
) -> ApiResult<Merchant> {
    validate_merchant_input(&input)?;
    let merchant = state.repo.create_merchant(&input).await?;
    success(merchant)
}

/// PUT /api/admin/merchants/:id - Overwrite a merchant.
pub async fn update_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MerchantInput>,
) -> ApiResult<Merchant> {
    validate_merchant_input(&input)?;
    let merchant = state.repo.update_merchant(&id, &input).await?;
    success(merchant)
}

/// DELETE /api/admin/merchants/:id - Permanently delete a merchant.
pub async fn delete_merchant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_merchant(&id).await?;
    success(())
}

fn validate_merchant_input(input: &MerchantInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Merchant name is required".to_string(),
        ));
    }
    Ok(())
}
