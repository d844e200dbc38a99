//! Handlers for offer settings.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current margin and service charge.
///
/// # Endpoint
///
/// `GET /api/admin/settings`
pub async fn get_settings_handler(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let settings = state.settings_service.get().await?;
    Ok(Json(settings.into()))
}

/// Replaces the margin and service charge.
///
/// # Endpoint
///
/// `PUT /api/admin/settings`
///
/// # Errors
///
/// Returns 400 Bad Request for a percentage outside `0..=100` or negative amounts.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    payload.validate()?;

    let settings = state
        .settings_service
        .update(payload.margin, payload.service_charge)
        .await?;

    Ok(Json(settings.into()))
}
