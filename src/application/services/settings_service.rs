//! Offer settings management.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Margin, PricingSettings};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

/// Service for reading and changing margin and service-charge settings.
pub struct SettingsService<R: SettingsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: SettingsRepository + ?Sized> SettingsService<R> {
    /// Creates a new settings service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the current settings.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn get(&self) -> Result<PricingSettings, AppError> {
        self.repository.get().await
    }

    /// Validates and stores new settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - a percentage margin is outside `0..=100`
    /// - a fixed margin or the service charge is negative or not finite
    pub async fn update(
        &self,
        margin: Margin,
        service_charge: f64,
    ) -> Result<PricingSettings, AppError> {
        validate(margin, service_charge)?;

        let settings = PricingSettings {
            margin,
            service_charge,
            updated_at: Utc::now(),
        };

        let stored = self.repository.update(settings).await?;
        tracing::info!(
            margin_type = stored.margin.kind(),
            margin_value = stored.margin.value(),
            service_charge = stored.service_charge,
            "Pricing settings updated"
        );
        Ok(stored)
    }
}

fn validate(margin: Margin, service_charge: f64) -> Result<(), AppError> {
    match margin {
        Margin::Percentage(pct) if !(0.0..=100.0).contains(&pct) => {
            return Err(AppError::bad_request(
                "Percentage margin must be between 0 and 100",
                json!({ "margin": pct }),
            ));
        }
        Margin::Fixed(flat) if !flat.is_finite() || flat < 0.0 => {
            return Err(AppError::bad_request(
                "Fixed margin must be a non-negative amount",
                json!({ "margin": flat }),
            ));
        }
        _ => {}
    }

    if !service_charge.is_finite() || service_charge < 0.0 {
        return Err(AppError::bad_request(
            "Service charge must be a non-negative amount",
            json!({ "service_charge": service_charge }),
        ));
    }

    Ok(())
}
