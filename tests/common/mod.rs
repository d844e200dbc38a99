#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use trade_in_pricing::application::services::AuthService;
use trade_in_pricing::domain::entities::{Margin, NewSaleRecord, PricingSettings, SaleRecord};
use trade_in_pricing::domain::repositories::{SaleRecordRepository, SettingsRepository};
use trade_in_pricing::error::AppError;
use trade_in_pricing::infrastructure::session::InMemorySessionStore;
use trade_in_pricing::state::AppState;

pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// In-process sale record store with the same filtering and ordering rules as
/// the PostgreSQL repository.
#[derive(Default)]
pub struct FakeSaleRecords {
    records: RwLock<Vec<SaleRecord>>,
    failing: AtomicBool,
}

impl FakeSaleRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, vin: &str, sale_year: i32, make: &str, sale_price: f64) {
        let mut records = self.records.write().await;
        let id = records.len() as i64 + 1;
        records.push(SaleRecord::new(
            id,
            vin.to_string(),
            sale_year,
            make.to_string(),
            String::new(),
            sale_price,
        ));
    }

    /// Makes every subsequent call return a database error.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::internal("Database error", json!({})))
        } else {
            Ok(())
        }
    }

    async fn select(
        &self,
        matches: impl Fn(&SaleRecord) -> bool,
        year_target: i32,
        tolerance: i32,
        limit: Option<i64>,
    ) -> Vec<SaleRecord> {
        let records = self.records.read().await;
        let mut found: Vec<SaleRecord> = records
            .iter()
            .filter(|r| r.sale_price > 0.0 && r.year_distance(year_target) <= tolerance)
            .filter(|r| matches(r))
            .cloned()
            .collect();

        found.sort_by(|a, b| {
            a.year_distance(year_target)
                .cmp(&b.year_distance(year_target))
                .then(a.sale_price.total_cmp(&b.sale_price))
        });

        if let Some(limit) = limit {
            found.truncate(limit as usize);
        }
        found
    }
}

#[async_trait]
impl SaleRecordRepository for FakeSaleRecords {
    async fn find_by_vin_prefix(
        &self,
        prefix: &str,
        year_target: i32,
        tolerance: i32,
        limit: Option<i64>,
    ) -> Result<Vec<SaleRecord>, AppError> {
        self.check()?;
        let prefix = prefix.to_ascii_uppercase();
        Ok(self
            .select(
                |r| r.vin.len() >= prefix.len() && r.vin.to_ascii_uppercase().starts_with(&prefix),
                year_target,
                tolerance,
                limit,
            )
            .await)
    }

    async fn find_by_make(
        &self,
        make: &str,
        year_target: i32,
        tolerance: i32,
        limit: i64,
    ) -> Result<Vec<SaleRecord>, AppError> {
        self.check()?;
        Ok(self
            .select(
                |r| r.vin.len() >= 8 && r.make == make,
                year_target,
                tolerance,
                Some(limit),
            )
            .await)
    }

    async fn insert_batch(&self, batch: Vec<NewSaleRecord>) -> Result<u64, AppError> {
        self.check()?;
        let inserted = batch.len() as u64;
        for r in batch {
            self.add(&r.vin, r.sale_year, &r.make, r.sale_price).await;
        }
        Ok(inserted)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.records.read().await.len() as i64)
    }
}

/// Single-row settings store seeded with a 20% margin and no service charge.
pub struct FakeSettings {
    current: RwLock<PricingSettings>,
}

impl FakeSettings {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(PricingSettings {
                margin: Margin::Percentage(20.0),
                service_charge: 0.0,
                updated_at: Utc::now(),
            }),
        }
    }
}

#[async_trait]
impl SettingsRepository for FakeSettings {
    async fn get(&self) -> Result<PricingSettings, AppError> {
        Ok(self.current.read().await.clone())
    }

    async fn update(&self, settings: PricingSettings) -> Result<PricingSettings, AppError> {
        *self.current.write().await = settings.clone();
        Ok(settings)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub sales: Arc<FakeSaleRecords>,
    pub settings: Arc<FakeSettings>,
}

pub fn create_test_context() -> TestContext {
    let sales = Arc::new(FakeSaleRecords::new());
    let settings = Arc::new(FakeSettings::new());

    let auth_service = AuthService::new(
        Arc::new(InMemorySessionStore::new()),
        ADMIN_PASSWORD,
        "test-signing-secret".to_string(),
        3600,
    );

    let state = AppState::new(sales.clone(), settings.clone(), auth_service);

    TestContext {
        state,
        sales,
        settings,
    }
}
