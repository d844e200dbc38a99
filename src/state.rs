//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, PricingService, SettingsService};
use crate::domain::repositories::{SaleRecordRepository, SettingsRepository};

/// Pricing service over type-erased repositories.
pub type DynPricingService = PricingService<dyn SaleRecordRepository, dyn SettingsRepository>;

/// Settings service over a type-erased repository.
pub type DynSettingsService = SettingsService<dyn SettingsRepository>;

/// Services shared by all request handlers.
///
/// Repositories and the session store are passed in as trait objects, so the
/// same state type serves PostgreSQL, Redis, and in-process test backends.
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: Arc<DynPricingService>,
    pub settings_service: Arc<DynSettingsService>,
    pub auth_service: Arc<AuthService>,
    pub sale_records: Arc<dyn SaleRecordRepository>,
}

impl AppState {
    /// Wires services on top of the given backends.
    pub fn new(
        sale_records: Arc<dyn SaleRecordRepository>,
        settings: Arc<dyn SettingsRepository>,
        auth_service: AuthService,
    ) -> Self {
        Self {
            pricing_service: Arc::new(PricingService::new(
                sale_records.clone(),
                settings.clone(),
            )),
            settings_service: Arc::new(SettingsService::new(settings)),
            auth_service: Arc::new(auth_service),
            sale_records,
        }
    }
}
