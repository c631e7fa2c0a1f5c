//! Global settings API endpoints (admin).

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::models::{GlobalSettings, UpdateSettingsRequest};
use crate::AppState;

/// GET /api/admin/settings - Get the settings singleton for the edit form.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<GlobalSettings> {
    let settings = state.repo.get_settings().await?;
    success(settings)
}

/// PUT /api/admin/settings - Overwrite the global contact link.
///
/// Unconditional last-write-wins; there is no optimistic-lock check.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> ApiResult<GlobalSettings> {
    let settings = state.repo.set_settings(&request.contact_link).await?;
    success(settings)
}
