//! Price history to chart series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PriceHistory, PricePoint};

/// One titled line chart: adjusted close over a lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub stock: String,
    pub title: String,
    pub window: String,
    pub points: Vec<PricePoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest adjusted close, if any points exist.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().map(|point| point.adjusted_close);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Adjusted closes in date order.
///
/// Bars without an adjusted close are dropped; the raw close is never used
/// in its place. When a date repeats, the later bar wins.
pub fn project(history: &PriceHistory) -> Vec<PricePoint> {
    let mut by_date = BTreeMap::new();
    for bar in &history.bars {
        if let Some(adjusted_close) = bar.adjusted_close.filter(|v| v.is_finite()) {
            by_date.insert(bar.date, adjusted_close);
        }
    }

    by_date
        .into_iter()
        .map(|(date, adjusted_close)| PricePoint {
            date,
            adjusted_close,
        })
        .collect()
}

/// Build the chart for `stock` from its price history.
pub fn chart(stock: &str, history: &PriceHistory) -> ChartSeries {
    let window = history.period.description();
    ChartSeries {
        stock: stock.to_owned(),
        title: format!("{stock} Price ({window})"),
        window: window.to_owned(),
        points: project(history),
    }
}
