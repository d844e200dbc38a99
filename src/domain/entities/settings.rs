//! Pricing settings entity and the offer adjustment rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the business margin is taken out of a raw estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Margin {
    /// Percentage of the raw price (`0..=100`).
    Percentage(f64),
    /// Flat amount in currency units.
    Fixed(f64),
}

impl Margin {
    /// Storage discriminator used by the settings table.
    pub fn kind(&self) -> &'static str {
        match self {
            Margin::Percentage(_) => "percentage",
            Margin::Fixed(_) => "fixed",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Margin::Percentage(v) | Margin::Fixed(v) => *v,
        }
    }

    /// Rebuilds a margin from its stored discriminator and value.
    pub fn from_parts(kind: &str, value: f64) -> Option<Self> {
        match kind {
            "percentage" => Some(Margin::Percentage(value)),
            "fixed" => Some(Margin::Fixed(value)),
            _ => None,
        }
    }
}

/// Offer configuration applied on top of the estimator's raw price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingSettings {
    pub margin: Margin,
    pub service_charge: f64,
    pub updated_at: DateTime<Utc>,
}

impl PricingSettings {
    /// Turns a raw historical price into the customer-facing offer.
    ///
    /// - percentage: `max(0, raw * (1 - pct/100) - service_charge)`
    /// - fixed: `max(0, raw - flat - service_charge)`
    pub fn apply(&self, raw_price: i64) -> i64 {
        let raw = raw_price as f64;
        let after_margin = match self.margin {
            Margin::Percentage(pct) => raw * (1.0 - pct / 100.0),
            Margin::Fixed(flat) => raw - flat,
        };

        (after_margin - self.service_charge).max(0.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(margin: Margin, service_charge: f64) -> PricingSettings {
        PricingSettings {
            margin,
            service_charge,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_percentage_margin() {
        let s = settings(Margin::Percentage(20.0), 150.0);
        assert_eq!(s.apply(10_000), 7_850);
    }

    #[test]
    fn test_fixed_margin() {
        let s = settings(Margin::Fixed(1_000.0), 250.0);
        assert_eq!(s.apply(10_000), 8_750);
    }

    #[test]
    fn test_clamped_at_zero() {
        assert_eq!(settings(Margin::Fixed(5_000.0), 500.0).apply(3_000), 0);
        assert_eq!(settings(Margin::Percentage(100.0), 1.0).apply(3_000), 0);
    }

    #[test]
    fn test_zero_settings_keep_raw_price() {
        assert_eq!(settings(Margin::Percentage(0.0), 0.0).apply(6_733), 6_733);
    }

    #[test]
    fn test_margin_parts_roundtrip() {
        let m = Margin::Fixed(300.0);
        assert_eq!(Margin::from_parts(m.kind(), m.value()), Some(m));
        assert_eq!(Margin::from_parts("bogus", 1.0), None);
    }

    #[test]
    fn test_margin_json_shape() {
        let json = serde_json::to_value(Margin::Percentage(15.0)).unwrap();
        assert_eq!(json["type"], "percentage");
        assert_eq!(json["value"], 15.0);
    }
}
