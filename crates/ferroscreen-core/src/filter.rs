//! Ratio filter engine.
//!
//! Raw provider fundamentals go through three steps:
//!
//! 1. [`NormalizedMetrics::from_snapshot`] scales dividend yield and ROE from
//!    fractions to percentages. Absent values stay absent.
//! 2. [`NormalizedMetrics::complete`] yields [`CompleteMetrics`] only when all
//!    four ratios are present. Thresholds can only be applied to complete
//!    metrics, so a stock with any missing ratio can never pass.
//! 3. [`ThresholdSelection::admits`] applies the ranges and [`FilteredRow`]
//!    rounds each value to two decimals for display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FundamentalsSnapshot, ThresholdSelection};

/// Ratios after percentage scaling; any of them may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    pub pe: Option<f64>,
    pub pb: Option<f64>,
    pub dividend_yield_percent: Option<f64>,
    pub roe_percent: Option<f64>,
}

impl NormalizedMetrics {
    pub fn from_snapshot(snapshot: &FundamentalsSnapshot) -> Self {
        Self {
            pe: snapshot.trailing_pe,
            pb: snapshot.price_to_book,
            dividend_yield_percent: snapshot.dividend_yield_raw.map(to_percent),
            roe_percent: snapshot.return_on_equity_raw.map(to_percent),
        }
    }

    pub fn complete(&self) -> Option<CompleteMetrics> {
        Some(CompleteMetrics {
            pe: self.pe?,
            pb: self.pb?,
            dividend_yield_percent: self.dividend_yield_percent?,
            roe_percent: self.roe_percent?,
        })
    }

    /// Names of the ratios the provider did not report.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("pe", self.pe),
            ("pb", self.pb),
            ("dividend_yield", self.dividend_yield_percent),
            ("roe", self.roe_percent),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// All four ratios present, percentages already scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompleteMetrics {
    pub pe: f64,
    pub pb: f64,
    pub dividend_yield_percent: f64,
    pub roe_percent: f64,
}

impl ThresholdSelection {
    pub fn admits(&self, metrics: &CompleteMetrics) -> bool {
        self.pe_min <= metrics.pe
            && metrics.pe <= self.pe_max
            && self.pb_min <= metrics.pb
            && metrics.pb <= self.pb_max
            && metrics.dividend_yield_percent >= self.dividend_yield_min
            && metrics.roe_percent >= self.roe_min
    }
}

/// Display row for a stock that passed every threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredRow {
    pub stock: String,
    pub pe: f64,
    pub pb: f64,
    pub roe_percent: f64,
    pub dividend_yield_percent: f64,
}

impl FilteredRow {
    pub fn from_metrics(stock: impl Into<String>, metrics: &CompleteMetrics) -> Self {
        Self {
            stock: stock.into(),
            pe: round2(metrics.pe),
            pb: round2(metrics.pb),
            roe_percent: round2(metrics.roe_percent),
            dividend_yield_percent: round2(metrics.dividend_yield_percent),
        }
    }
}

/// Decide whether `snapshot` survives `thresholds` and shape its row.
pub fn evaluate(
    stock: &str,
    snapshot: &FundamentalsSnapshot,
    thresholds: &ThresholdSelection,
) -> Option<FilteredRow> {
    let normalized = NormalizedMetrics::from_snapshot(snapshot);
    let Some(metrics) = normalized.complete() else {
        debug!(
            stock,
            symbol = %snapshot.symbol,
            missing = ?normalized.missing_fields(),
            "excluded: provider omitted ratios"
        );
        return None;
    };

    if !thresholds.admits(&metrics) {
        debug!(stock, symbol = %snapshot.symbol, ?metrics, "excluded: outside thresholds");
        return None;
    }

    Some(FilteredRow::from_metrics(stock, &metrics))
}

/// Fraction to percentage (`0.045` becomes `4.5`).
pub fn to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Round to two decimals.
///
/// The `value * 100.0` product is rounded half away from zero, so ties are
/// decided on that float rather than on the decimal input: `23.445` becomes
/// `23.45` and `2.675` becomes `2.68`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
