//! Repository trait for pricing settings.

use crate::domain::entities::PricingSettings;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the single row of offer settings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the settings row is missing.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self) -> Result<PricingSettings, AppError>;

    /// Replaces the current settings and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, settings: PricingSettings) -> Result<PricingSettings, AppError>;
}
