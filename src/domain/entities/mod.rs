//! Core domain entities.
//!
//! Entities are plain data structures; pricing rules live in
//! [`crate::domain::pricing`] and [`crate::domain::vin`].
//!
//! # Entity Types
//!
//! - [`SaleRecord`] - One historical vehicle sale used as a price comparable
//! - [`PricingSettings`] - Margin and service charge applied to raw estimates
//! - [`AdminSession`] - An authenticated back-office session
//!
//! Records created from outside the store use a separate `New*` struct
//! without database-assigned fields.

pub mod sale_record;
pub mod session;
pub mod settings;

pub use sale_record::{NewSaleRecord, SaleRecord};
pub use session::AdminSession;
pub use settings::{Margin, PricingSettings};
