use serde::{Deserialize, Serialize};
use time::Date;

use crate::{LookbackPeriod, Symbol, UtcDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Raw fundamentals as reported by a provider for one ticker.
///
/// Every ratio is optional: providers routinely omit fields for some listings.
/// Dividend yield and return on equity are fractional (0.045 means 4.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub symbol: Symbol,
    pub as_of: UtcDateTime,
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub dividend_yield_raw: Option<f64>,
    pub return_on_equity_raw: Option<f64>,
}

impl FundamentalsSnapshot {
    /// Build a snapshot, treating non-finite provider values as absent.
    pub fn new(
        symbol: Symbol,
        as_of: UtcDateTime,
        trailing_pe: Option<f64>,
        price_to_book: Option<f64>,
        dividend_yield_raw: Option<f64>,
        return_on_equity_raw: Option<f64>,
    ) -> Self {
        Self {
            symbol,
            as_of,
            trailing_pe: finite(trailing_pe),
            price_to_book: finite(price_to_book),
            dividend_yield_raw: finite(dividend_yield_raw),
            return_on_equity_raw: finite(return_on_equity_raw),
        }
    }
}

/// One daily bar of a price history, as delivered by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryBar {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub close: Option<f64>,
    pub adjusted_close: Option<f64>,
}

impl HistoryBar {
    pub fn new(date: Date, close: Option<f64>, adjusted_close: Option<f64>) -> Self {
        Self {
            date,
            close: finite(close),
            adjusted_close: finite(adjusted_close),
        }
    }
}

/// Daily price history for one ticker over a lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub symbol: Symbol,
    pub period: LookbackPeriod,
    pub bars: Vec<HistoryBar>,
}

impl PriceHistory {
    pub fn new(symbol: Symbol, period: LookbackPeriod, bars: Vec<HistoryBar>) -> Self {
        Self {
            symbol,
            period,
            bars,
        }
    }
}

/// Chartable point: trading date and split/dividend adjusted close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub adjusted_close: f64,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
