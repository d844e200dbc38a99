//! PostgreSQL implementation of the sale record repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewSaleRecord, SaleRecord};
use crate::domain::repositories::SaleRecordRepository;
use crate::error::AppError;

/// Row shape returned by comparable lookups.
#[derive(Debug, sqlx::FromRow)]
struct SaleRecordRow {
    id: i64,
    vin: String,
    sale_year: i32,
    make: Option<String>,
    model: Option<String>,
    sale_price: f64,
}

impl From<SaleRecordRow> for SaleRecord {
    fn from(row: SaleRecordRow) -> Self {
        SaleRecord::new(
            row.id,
            row.vin,
            row.sale_year,
            row.make.unwrap_or_default(),
            row.model.unwrap_or_default(),
            row.sale_price,
        )
    }
}

/// PostgreSQL repository for historical sale records.
pub struct PgSaleRecordRepository {
    pool: Arc<PgPool>,
}

impl PgSaleRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRecordRepository for PgSaleRecordRepository {
    async fn find_by_vin_prefix(
        &self,
        prefix: &str,
        year_target: i32,
        tolerance: i32,
        limit: Option<i64>,
    ) -> Result<Vec<SaleRecord>, AppError> {
        let prefix = prefix.to_ascii_uppercase();
        let prefix_len = prefix.chars().count() as i32;

        let rows = sqlx::query_as::<_, SaleRecordRow>(
            r#"
            SELECT id, vin, sale_year, make, model, sale_price::float8 AS sale_price
            FROM sale_records
            WHERE sale_price > 0
              AND vin IS NOT NULL
              AND LENGTH(vin) >= $2
              AND UPPER(LEFT(vin, $2)) = $1
              AND ABS(sale_year - $3) <= $4
            ORDER BY ABS(sale_year - $3), sale_price
            LIMIT $5
            "#,
        )
        .bind(&prefix)
        .bind(prefix_len)
        .bind(year_target)
        .bind(tolerance)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(SaleRecord::from).collect())
    }

    async fn find_by_make(
        &self,
        make: &str,
        year_target: i32,
        tolerance: i32,
        limit: i64,
    ) -> Result<Vec<SaleRecord>, AppError> {
        let rows = sqlx::query_as::<_, SaleRecordRow>(
            r#"
            SELECT id, vin, sale_year, make, model, sale_price::float8 AS sale_price
            FROM sale_records
            WHERE sale_price > 0
              AND vin IS NOT NULL
              AND LENGTH(vin) >= 8
              AND make = $1
              AND ABS(sale_year - $2) <= $3
            ORDER BY ABS(sale_year - $2), sale_price
            LIMIT $4
            "#,
        )
        .bind(make)
        .bind(year_target)
        .bind(tolerance)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(SaleRecord::from).collect())
    }

    async fn insert_batch(&self, records: Vec<NewSaleRecord>) -> Result<u64, AppError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO sale_records (vin, sale_year, make, model, sale_price) ");

        builder.push_values(records, |mut row, record| {
            row.push_bind(record.vin)
                .push_bind(record.sale_year)
                .push_bind(record.make)
                .push_bind(record.model)
                .push_bind(record.sale_price);
        });

        let result = builder.build().execute(self.pool.as_ref()).await?;
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sale_records")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }
}
