//! DTOs for the pricing lookup endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::{MatchTier, PricingQuery, Quote};

/// VINs are alphanumeric; the check digit scheme is not enforced.
static VIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid VIN regex"));

/// Request to price a vehicle.
///
/// `year` and `vehicle_year` accept either JSON numbers or numeric strings,
/// since web forms usually post them as text.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PricingLookupRequest {
    #[validate(length(min = 6, max = 17))]
    #[validate(regex(path = *VIN_REGEX, message = "VIN must be alphanumeric"))]
    pub vin: String,

    /// Model year as submitted by the user or decoded client-side.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    /// Make picked manually in the UI.
    #[validate(length(max = 64))]
    pub vehicle_make: Option<String>,

    /// Model picked manually in the UI.
    #[validate(length(max = 64))]
    pub vehicle_model: Option<String>,

    /// Year picked manually in the UI.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub vehicle_year: Option<i32>,
}

impl From<PricingLookupRequest> for PricingQuery {
    fn from(req: PricingLookupRequest) -> Self {
        PricingQuery {
            vin: req.vin,
            year: req.year,
            make_hint: req.vehicle_make,
            model_hint: req.vehicle_model,
            year_hint: req.vehicle_year,
        }
    }
}

/// A found offer.
#[derive(Debug, Serialize)]
pub struct PricingLookupResponse {
    /// Customer-facing offer after margin and service charge.
    pub price: i64,
    /// Historical price before adjustment.
    pub raw_price: i64,
    pub tier: MatchTier,
    pub comparables: usize,
}

impl From<Quote> for PricingLookupResponse {
    fn from(quote: Quote) -> Self {
        Self {
            price: quote.price,
            raw_price: quote.raw_price,
            tier: quote.tier,
            comparables: quote.comparables,
        }
    }
}
