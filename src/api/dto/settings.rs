//! DTOs for the admin settings endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Margin, PricingSettings};

/// Replacement settings.
///
/// ```json
/// { "margin": { "type": "percentage", "value": 15 }, "service_charge": 199 }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    pub margin: Margin,

    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub service_charge: f64,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub margin: Margin,
    pub service_charge: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<PricingSettings> for SettingsResponse {
    fn from(settings: PricingSettings) -> Self {
        Self {
            margin: settings.margin,
            service_charge: settings.service_charge,
            updated_at: settings.updated_at,
        }
    }
}
