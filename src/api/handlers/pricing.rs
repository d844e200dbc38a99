//! Handler for the pricing lookup endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pricing::{PricingLookupRequest, PricingLookupResponse};
use crate::application::services::PricingQuery;
use crate::domain::vin::normalize_vin;
use crate::error::AppError;
use crate::state::AppState;

/// Estimates a trade-in offer for a vehicle.
///
/// # Endpoint
///
/// `POST /api/pricing/lookup`
///
/// # Request Body
///
/// ```json
/// {
///   "vin": "1HGCM82633A004352",
///   "year": 2003,
///   "vehicle_make": "Honda",     // optional
///   "vehicle_model": "Accord",   // optional
///   "vehicle_year": "2003"       // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "price": 3210, "raw_price": 4200, "tier": "vin_prefix", "comparables": 3 }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 404 Not Found when no comparable sale exists; the body carries no `price`
pub async fn pricing_lookup_handler(
    State(state): State<AppState>,
    Json(payload): Json<PricingLookupRequest>,
) -> Result<Json<PricingLookupResponse>, AppError> {
    payload.validate()?;

    let query = PricingQuery::from(payload);

    match state.pricing_service.quote(&query).await {
        Some(quote) => Ok(Json(quote.into())),
        None => Err(AppError::not_found(
            "No pricing data available; offer pending manual review",
            json!({ "vin": normalize_vin(&query.vin), "year": query.year }),
        )),
    }
}
