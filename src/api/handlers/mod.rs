//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod pricing;
pub mod sales;
pub mod settings;

pub use auth::{login_handler, logout_handler};
pub use health::health_handler;
pub use pricing::pricing_lookup_handler;
pub use sales::sales_count_handler;
pub use settings::{get_settings_handler, update_settings_handler};
