//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and decoded into typed
//! `FromRow` structs; those rows are converted into domain entities before
//! leaving this module.
//!
//! # Repositories
//!
//! - [`PgSaleRecordRepository`] - Historical sale comparables and bulk loading
//! - [`PgSettingsRepository`] - Offer settings row

pub mod pg_sale_record_repository;
pub mod pg_settings_repository;

pub use pg_sale_record_repository::PgSaleRecordRepository;
pub use pg_settings_repository::PgSettingsRepository;
