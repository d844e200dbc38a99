//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contracts; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`SaleRecordRepository`] - Historical sale comparables
//! - [`SettingsRepository`] - Offer margin and service charge configuration

pub mod sale_record_repository;
pub mod settings_repository;

pub use sale_record_repository::SaleRecordRepository;
pub use settings_repository::SettingsRepository;

#[cfg(test)]
pub use sale_record_repository::MockSaleRecordRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
