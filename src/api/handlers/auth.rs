//! Admin login and logout handlers.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::domain::entities::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges the admin password for a session id.
///
/// # Endpoint
///
/// `POST /api/admin/login`
///
/// # Errors
///
/// Returns 401 Unauthorized for a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let session = state.auth_service.login(&payload.password).await?;

    Ok(Json(LoginResponse {
        session_id: session.id,
        expires_at: session.expires_at,
    }))
}

/// Ends the caller's session.
///
/// # Endpoint
///
/// `POST /api/admin/logout` (requires a valid session)
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> Result<StatusCode, AppError> {
    state.auth_service.logout(&session.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
