//! Handler for sale record statistics.

use axum::{Json, extract::State};

use crate::api::dto::sales::SalesCountResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Number of historical sale records loaded.
///
/// # Endpoint
///
/// `GET /api/admin/sales/count`
pub async fn sales_count_handler(
    State(state): State<AppState>,
) -> Result<Json<SalesCountResponse>, AppError> {
    let total = state.sale_records.count().await?;
    Ok(Json(SalesCountResponse { total }))
}
