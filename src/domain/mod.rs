//! Domain layer: entities, pricing rules, and repository contracts.
//!
//! Nothing here depends on HTTP or a concrete database.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`vin`] - WMI make decoding and model-year disambiguation
//! - [`pricing`] - Outlier-filtered price aggregation
//!
//! # Estimation Flow
//!
//! 1. [`vin::resolve_target_year`] picks the model year to search around
//! 2. [`vin::decode_make`] decodes the manufacturer
//! 3. [`crate::application::services::PricingService`] runs the tiered lookup
//!    through [`repositories::SaleRecordRepository`]
//! 4. [`pricing::summarize_prices`] reduces the comparables to one price

pub mod entities;
pub mod pricing;
pub mod repositories;
pub mod vin;
