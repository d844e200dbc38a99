//! Repository trait for historical sale records.

use crate::domain::entities::{NewSaleRecord, SaleRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the historical sales table, plus bulk loading.
///
/// Every lookup only returns rows with `sale_price > 0` and a non-null VIN, and
/// orders them by `abs(sale_year - year_target)` then by `sale_price`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSaleRecordRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaleRecordRepository: Send + Sync {
    /// Finds records whose VIN starts with `prefix` (case-insensitive).
    ///
    /// Only VINs at least `prefix.len()` characters long are considered, and
    /// `sale_year` must be within `tolerance` years of `year_target`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_vin_prefix(
        &self,
        prefix: &str,
        year_target: i32,
        tolerance: i32,
        limit: Option<i64>,
    ) -> Result<Vec<SaleRecord>, AppError>;

    /// Finds records of the given make code within `tolerance` years of
    /// `year_target`, restricted to VINs of at least 8 characters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_make(
        &self,
        make: &str,
        year_target: i32,
        tolerance: i32,
        limit: i64,
    ) -> Result<Vec<SaleRecord>, AppError>;

    /// Inserts a batch of records, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_batch(&self, records: Vec<NewSaleRecord>) -> Result<u64, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
