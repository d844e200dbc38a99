//! VIN-based price estimation and offer quoting.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::entities::SaleRecord;
use crate::domain::pricing::summarize_prices;
use crate::domain::repositories::{SaleRecordRepository, SettingsRepository};
use crate::domain::vin::{
    decode_make, make_code_from_name, normalize_vin, resolve_target_year, vin_prefix,
};

/// Input of a price lookup.
#[derive(Debug, Clone, Default)]
pub struct PricingQuery {
    pub vin: String,
    pub year: i32,
    /// Make picked manually in the UI; consulted only when the WMI is unknown.
    pub make_hint: Option<String>,
    pub model_hint: Option<String>,
    pub year_hint: Option<i32>,
}

impl PricingQuery {
    pub fn new(vin: impl Into<String>, year: i32) -> Self {
        Self {
            vin: vin.into(),
            year,
            ..Self::default()
        }
    }
}

/// Search stage that produced the comparables, from narrowest to broadest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// First 8 VIN characters, ±1 year.
    VinPrefix,
    /// Decoded make code, ±2 years, at most 50 rows.
    Make,
    /// First 6 VIN characters, ±2 years, at most 20 rows.
    ShortPrefix,
}

impl MatchTier {
    /// Tiers in the order they are attempted.
    pub const ALL: [MatchTier; 3] = [MatchTier::VinPrefix, MatchTier::Make, MatchTier::ShortPrefix];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::VinPrefix => "vin_prefix",
            MatchTier::Make => "make",
            MatchTier::ShortPrefix => "short_prefix",
        }
    }

    /// Minimum query VIN length for the tier to be attempted.
    fn min_vin_len(&self) -> usize {
        match self {
            MatchTier::VinPrefix | MatchTier::Make => 8,
            MatchTier::ShortPrefix => 6,
        }
    }

    fn year_tolerance(&self) -> i32 {
        match self {
            MatchTier::VinPrefix => 1,
            MatchTier::Make | MatchTier::ShortPrefix => 2,
        }
    }
}

/// Result of [`PricingService::estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingOutcome {
    Found {
        price: i64,
        tier: MatchTier,
        comparables: usize,
    },
    NoMatch,
}

/// A customer-facing offer derived from an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Representative historical price before margin and service charge.
    pub raw_price: i64,
    /// Offer after margin and service charge, never negative.
    pub price: i64,
    pub tier: MatchTier,
    pub comparables: usize,
}

const MAKE_TIER_LIMIT: i64 = 50;
const SHORT_PREFIX_TIER_LIMIT: i64 = 20;

/// Service estimating trade-in prices from historical sales.
///
/// Lookups are read-only and hold no state between calls; data-store failures
/// never escape [`PricingService::estimate`].
pub struct PricingService<R: SaleRecordRepository + ?Sized, S: SettingsRepository + ?Sized> {
    sales: Arc<R>,
    settings: Arc<S>,
}

impl<R: SaleRecordRepository + ?Sized, S: SettingsRepository + ?Sized> PricingService<R, S> {
    /// Creates a new pricing service.
    pub fn new(sales: Arc<R>, settings: Arc<S>) -> Self {
        Self { sales, settings }
    }

    /// Estimates a representative historical sale price.
    ///
    /// # Tiers
    ///
    /// Each tier runs only if the previous one produced no rows:
    ///
    /// 1. [`MatchTier::VinPrefix`] - 8-character VIN prefix within ±1 year
    /// 2. [`MatchTier::Make`] - decoded make within ±2 years (50 rows max)
    /// 3. [`MatchTier::ShortPrefix`] - 6-character VIN prefix within ±2 years (20 rows max)
    ///
    /// The target year is disambiguated from the VIN's year character. A tier
    /// whose query fails is logged and treated as empty; nothing is retried.
    pub async fn estimate(&self, query: &PricingQuery) -> PricingOutcome {
        let vin = normalize_vin(&query.vin);
        let vin_len = vin.chars().count();
        let target_year = resolve_target_year(&vin, query.year);
        let make = decode_make(&vin)
            .or_else(|| query.make_hint.as_deref().and_then(make_code_from_name));

        debug!(
            vin = %vin,
            submitted_year = query.year,
            target_year,
            make = ?make,
            model_hint = ?query.model_hint,
            year_hint = ?query.year_hint,
            "Estimating price"
        );

        for tier in MatchTier::ALL {
            if vin_len < tier.min_vin_len() {
                debug!(tier = tier.as_str(), vin_len, "VIN too short, skipping tier");
                continue;
            }

            let rows = match self.run_tier(tier, &vin, target_year, make).await {
                Some(rows) => rows,
                None => continue,
            };

            let prices: Vec<f64> = rows
                .iter()
                .map(|r| r.sale_price)
                .filter(|p| p.is_finite() && *p > 0.0)
                .collect();

            let Some(summary) = summarize_prices(&prices) else {
                debug!(tier = tier.as_str(), "No comparables");
                continue;
            };

            debug!(
                tier = tier.as_str(),
                comparables = prices.len(),
                mean = summary.mean,
                std_dev = summary.std_dev,
                discarded = summary.discarded,
                price = summary.price,
                "Comparables found"
            );
            metrics::counter!("pricing_lookups_total", "outcome" => tier.as_str()).increment(1);

            return PricingOutcome::Found {
                price: summary.price,
                tier,
                comparables: prices.len(),
            };
        }

        info!(vin = %vin, target_year, "No pricing data for VIN");
        metrics::counter!("pricing_lookups_total", "outcome" => "no_match").increment(1);
        PricingOutcome::NoMatch
    }

    /// Estimates a price and applies the configured margin and service charge.
    ///
    /// Returns `None` when there is no estimate or the settings cannot be
    /// loaded; callers treat both as "offer pending manual review".
    pub async fn quote(&self, query: &PricingQuery) -> Option<Quote> {
        let PricingOutcome::Found {
            price,
            tier,
            comparables,
        } = self.estimate(query).await
        else {
            return None;
        };

        let settings = match self.settings.get().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load pricing settings: {}", e);
                return None;
            }
        };

        Some(Quote {
            raw_price: price,
            price: settings.apply(price),
            tier,
            comparables,
        })
    }

    /// Runs one tier's query. `None` means the tier was not applicable or failed.
    async fn run_tier(
        &self,
        tier: MatchTier,
        vin: &str,
        target_year: i32,
        make: Option<&str>,
    ) -> Option<Vec<SaleRecord>> {
        let tolerance = tier.year_tolerance();

        let result = match tier {
            MatchTier::VinPrefix => {
                self.sales
                    .find_by_vin_prefix(vin_prefix(vin, 8), target_year, tolerance, None)
                    .await
            }
            MatchTier::Make => {
                let make = make?;
                self.sales
                    .find_by_make(make, target_year, tolerance, MAKE_TIER_LIMIT)
                    .await
            }
            MatchTier::ShortPrefix => {
                self.sales
                    .find_by_vin_prefix(
                        vin_prefix(vin, 6),
                        target_year,
                        tolerance,
                        Some(SHORT_PREFIX_TIER_LIMIT),
                    )
                    .await
            }
        };

        match result {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(tier = tier.as_str(), "Sale record lookup failed: {}", e);
                None
            }
        }
    }
}
