//! Business logic services for the application layer.

pub mod auth_service;
pub mod import_service;
pub mod pricing_service;
pub mod settings_service;

pub use auth_service::AuthService;
pub use import_service::{ImportReport, ImportService};
pub use pricing_service::{MatchTier, PricingOutcome, PricingQuery, PricingService, Quote};
pub use settings_service::SettingsService;
