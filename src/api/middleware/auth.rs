//! Bearer session authentication middleware for admin endpoints.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests carrying an admin session id.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <session_id>
/// ```
///
/// On success the [`crate::domain::entities::AdminSession`] is inserted into
/// the request extensions for downstream handlers.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if the header
/// is missing or malformed, or the session is unknown or expired.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(session_id) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let session = st.auth_service.authenticate(&session_id).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
