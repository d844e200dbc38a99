//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a small, typed API.
//!
//! # Available Services
//!
//! - [`services::pricing_service::PricingService`] - Tiered VIN price estimation and quoting
//! - [`services::settings_service::SettingsService`] - Margin and service charge settings
//! - [`services::auth_service::AuthService`] - Admin login and sessions
//! - [`services::import_service::ImportService`] - Sales feed CSV loading

pub mod services;
