//! Price aggregation over comparable sales.
//!
//! Outliers are prices whose absolute deviation from the mean is strictly greater
//! than two population standard deviations. The threshold is a fixed heuristic
//! and changing it changes every quote.

/// Deviation multiplier beyond which a price is discarded.
pub const OUTLIER_SIGMA: f64 = 2.0;

/// Statistics computed while reducing a candidate set to one price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub kept: usize,
    pub discarded: usize,
    /// Final price in whole currency units.
    pub price: i64,
}

/// Reduces candidate sale prices to a single representative price.
///
/// Returns `None` for an empty slice. A single price is returned as-is
/// (rounded to whole units). Otherwise the mean of the prices within
/// [`OUTLIER_SIGMA`] population standard deviations is returned; when every
/// price is an outlier the unfiltered mean is used instead.
pub fn summarize_prices(prices: &[f64]) -> Option<PriceSummary> {
    match prices {
        [] => None,
        [only] => Some(PriceSummary {
            mean: *only,
            std_dev: 0.0,
            kept: 1,
            discarded: 0,
            price: only.round() as i64,
        }),
        _ => {
            let mean = average(prices);
            let std_dev = population_std_dev(prices, mean);
            let threshold = OUTLIER_SIGMA * std_dev;

            let kept: Vec<f64> = prices
                .iter()
                .copied()
                .filter(|p| (p - mean).abs() <= threshold)
                .collect();

            let price = if kept.is_empty() {
                mean
            } else {
                average(&kept)
            };

            Some(PriceSummary {
                mean,
                std_dev,
                kept: kept.len(),
                discarded: prices.len() - kept.len(),
                price: price.round() as i64,
            })
        }
    }
}

/// Shorthand for [`summarize_prices`] when only the price matters.
pub fn representative_price(prices: &[f64]) -> Option<i64> {
    summarize_prices(prices).map(|s| s.price)
}

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
