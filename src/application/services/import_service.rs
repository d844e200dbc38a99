//! Bulk loading of the historical sales CSV feed.

use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::entities::NewSaleRecord;
use crate::domain::repositories::SaleRecordRepository;
use crate::domain::vin::{decode_make, make_code_from_name, normalize_vin};
use crate::error::AppError;

/// Rows written per INSERT statement.
pub const IMPORT_BATCH_SIZE: usize = 500;

/// Shortest VIN that can ever take part in matching.
const MIN_VIN_LEN: usize = 6;

/// One line of the sales feed. Every field is optional so that malformed
/// lines are skipped instead of aborting the whole import.
#[derive(Debug, Deserialize)]
struct CsvSaleRow {
    vin: Option<String>,
    #[serde(alias = "sale_year")]
    year: Option<String>,
    make: Option<String>,
    model: Option<String>,
    #[serde(alias = "price")]
    sale_price: Option<String>,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Data lines read from the feed.
    pub read: usize,
    /// Rows written to the store.
    pub imported: u64,
    /// Lines rejected during validation.
    pub skipped: usize,
}

/// Parses the sales feed into records ready for insertion.
///
/// Expects a header line with `vin`, `year` (or `sale_year`), `make`, `model`
/// and `sale_price` (or `price`); other columns are ignored. Lines without a
/// usable VIN, year, or positive price are counted as skipped.
pub fn parse_sales_csv<Rd: Read>(reader: Rd) -> (Vec<NewSaleRecord>, ImportReport) {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut report = ImportReport::default();

    for (line_num, result) in csv_reader.deserialize::<CsvSaleRow>().enumerate() {
        report.read += 1;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping unreadable CSV line {}: {}", line_num + 2, e);
                report.skipped += 1;
                continue;
            }
        };

        match validate_row(row) {
            Some(record) => records.push(record),
            None => {
                debug!("Skipping invalid CSV line {}", line_num + 2);
                report.skipped += 1;
            }
        }
    }

    (records, report)
}

fn validate_row(row: CsvSaleRow) -> Option<NewSaleRecord> {
    let vin = normalize_vin(row.vin.as_deref()?);
    if vin.chars().count() < MIN_VIN_LEN {
        return None;
    }

    let sale_year: i32 = row.year?.parse().ok()?;
    if !(1900..=2100).contains(&sale_year) {
        return None;
    }

    let sale_price = parse_price(row.sale_price.as_deref()?)?;

    let make = resolve_make(row.make.as_deref(), &vin);

    let model = row
        .model
        .map(|m| m.trim().to_ascii_uppercase())
        .unwrap_or_default();

    Some(NewSaleRecord {
        vin,
        sale_year,
        make,
        model,
        sale_price,
    })
}

/// Make code stored with a record: the code for a known make name, else the
/// code decoded from the VIN, else the upper-cased text as given.
fn resolve_make(raw: Option<&str>, vin: &str) -> String {
    let raw = raw.map(str::trim).filter(|m| !m.is_empty());

    raw.and_then(make_code_from_name)
        .or_else(|| decode_make(vin))
        .map(str::to_string)
        .or_else(|| raw.map(str::to_ascii_uppercase))
        .unwrap_or_default()
}

/// Parses a currency amount such as `"$12,500.00"`; only positive finite
/// amounts are accepted.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// Service loading the sales feed into the sale record store.
pub struct ImportService<R: SaleRecordRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: SaleRecordRepository + ?Sized> ImportService<R> {
    /// Creates a new import service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Parses and stores a CSV feed in batches of [`IMPORT_BATCH_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns the first repository error; batches written before it stay stored.
    pub async fn import_csv<Rd: Read>(&self, reader: Rd) -> Result<ImportReport, AppError> {
        let (records, report) = parse_sales_csv(reader);
        self.import_records(records, report).await
    }

    /// Stores already-parsed records, accumulating into `report`.
    ///
    /// # Errors
    ///
    /// Returns the first repository error.
    pub async fn import_records(
        &self,
        records: Vec<NewSaleRecord>,
        mut report: ImportReport,
    ) -> Result<ImportReport, AppError> {
        for batch in records.chunks(IMPORT_BATCH_SIZE) {
            report.imported += self.repository.insert_batch(batch.to_vec()).await?;
            debug!(imported = report.imported, "Sale record batch stored");
        }

        info!(
            read = report.read,
            imported = report.imported,
            skipped = report.skipped,
            "Sales feed import finished"
        );
        Ok(report)
    }
}
