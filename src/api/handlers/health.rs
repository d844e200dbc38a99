//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts sale records
/// 2. **Session store**: Backend ping
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let session_store = check_session_store(&state).await;

    let all_healthy = database.is_ok() && session_store.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            session_store,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.sale_records.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} sale records", count)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

async fn check_session_store(state: &AppState) -> CheckStatus {
    if state.auth_service.store_healthy().await {
        CheckStatus::ok("Session store reachable")
    } else {
        CheckStatus::error("Session store unreachable")
    }
}
