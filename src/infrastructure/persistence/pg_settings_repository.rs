//! PostgreSQL implementation of the settings repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Margin, PricingSettings};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    margin_type: String,
    margin_value: f64,
    service_charge: f64,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SettingsRow> for PricingSettings {
    type Error = AppError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        let margin = Margin::from_parts(&row.margin_type, row.margin_value).ok_or_else(|| {
            AppError::internal(
                "Unknown margin type in settings",
                json!({ "margin_type": row.margin_type }),
            )
        })?;

        Ok(PricingSettings {
            margin,
            service_charge: row.service_charge,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL repository for the single `pricing_settings` row (`id = 1`).
pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get(&self) -> Result<PricingSettings, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT margin_type, margin_value, service_charge, updated_at
            FROM pricing_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Pricing settings not configured", json!({})))?;

        row.try_into()
    }

    async fn update(&self, settings: PricingSettings) -> Result<PricingSettings, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO pricing_settings (id, margin_type, margin_value, service_charge, updated_at)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET margin_type = EXCLUDED.margin_type,
                margin_value = EXCLUDED.margin_value,
                service_charge = EXCLUDED.service_charge,
                updated_at = EXCLUDED.updated_at
            RETURNING margin_type, margin_value, service_charge, updated_at
            "#,
        )
        .bind(settings.margin.kind())
        .bind(settings.margin.value())
        .bind(settings.service_charge)
        .bind(settings.updated_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }
}
