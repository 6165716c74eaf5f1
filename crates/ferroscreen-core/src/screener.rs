//! Render-cycle orchestration.
//!
//! One [`Screener::render`] call is one refresh of the screen: every selected
//! stock's fundamentals are fetched and filtered, then every selected stock's
//! price history is fetched and projected. Calls are awaited one at a time in
//! selection order.
//!
//! A failed fetch never aborts the cycle. It becomes a [`ScreenWarning`]
//! naming the stock and the section it was missing from.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::data_source::{DataSource, SourceError};
use crate::filter::{evaluate, FilteredRow};
use crate::projection::{chart, ChartSeries};
use crate::registry::{Selection, SymbolEntry};
use crate::{LookbackPeriod, ProviderId, Symbol, ThresholdSelection};

/// Lookback window used by the screen's charts.
pub const SCREEN_PERIOD: LookbackPeriod = LookbackPeriod::SixMonths;

/// Which part of the screen a warning belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSection {
    Fundamentals,
    Chart,
}

/// A provider call that failed for one stock.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub stock: String,
    pub symbol: Symbol,
    pub error: SourceError,
}

impl FetchFailure {
    fn new(entry: &SymbolEntry, error: SourceError) -> Self {
        Self {
            stock: entry.display_name.clone(),
            symbol: entry.ticker.clone(),
            error,
        }
    }

    pub fn into_warning(self, section: WarningSection) -> ScreenWarning {
        ScreenWarning {
            stock: self.stock,
            section,
            message: self.error.to_string(),
        }
    }
}

impl Display for FetchFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.stock, self.symbol, self.error)
    }
}

/// Per-stock result of one provider call.
pub type SymbolOutcome<T> = Result<T, FetchFailure>;

/// Non-fatal problem surfaced next to the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenWarning {
    pub stock: String,
    pub section: WarningSection,
    pub message: String,
}

/// Everything one render cycle produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenReport {
    pub rows: Vec<FilteredRow>,
    pub charts: Vec<ChartSeries>,
    pub warnings: Vec<ScreenWarning>,
}

impl ScreenReport {
    pub fn warnings_for(&self, section: WarningSection) -> impl Iterator<Item = &ScreenWarning> {
        self.warnings
            .iter()
            .filter(move |warning| warning.section == section)
    }
}

/// Runs render cycles against one data source.
#[derive(Clone)]
pub struct Screener {
    source: Arc<dyn DataSource>,
    charts: bool,
}

impl Screener {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            charts: true,
        }
    }

    /// Skip the price-history half of the cycle.
    pub fn with_charts(mut self, enabled: bool) -> Self {
        self.charts = enabled;
        self
    }

    pub fn source_id(&self) -> ProviderId {
        self.source.id()
    }

    pub async fn render(
        &self,
        selection: &Selection,
        thresholds: &ThresholdSelection,
    ) -> ScreenReport {
        let mut report = ScreenReport::default();

        for entry in selection.entries() {
            match self.fundamentals_row(entry, thresholds).await {
                Ok(Some(row)) => report.rows.push(row),
                Ok(None) => {}
                Err(failure) => {
                    warn!(stock = %failure.stock, symbol = %failure.symbol, error = %failure.error, "fundamentals unavailable");
                    report
                        .warnings
                        .push(failure.into_warning(WarningSection::Fundamentals));
                }
            }
        }

        if self.charts {
            for entry in selection.entries() {
                match self.chart(entry, SCREEN_PERIOD).await {
                    Ok(series) => report.charts.push(series),
                    Err(failure) => {
                        warn!(stock = %failure.stock, symbol = %failure.symbol, error = %failure.error, "price history unavailable");
                        report.warnings.push(failure.into_warning(WarningSection::Chart));
                    }
                }
            }
        }

        info!(
            source = %self.source.id(),
            selected = selection.len(),
            rows = report.rows.len(),
            charts = report.charts.len(),
            warnings = report.warnings.len(),
            "render cycle complete"
        );
        report
    }

    /// Fetch one stock's fundamentals and run it through the filter.
    ///
    /// `Ok(None)` means the stock was fetched but excluded.
    pub async fn fundamentals_row(
        &self,
        entry: &SymbolEntry,
        thresholds: &ThresholdSelection,
    ) -> SymbolOutcome<Option<FilteredRow>> {
        debug!(stock = %entry.display_name, symbol = %entry.ticker, "fetching fundamentals");
        let snapshot = self
            .source
            .fundamentals(&entry.ticker)
            .await
            .map_err(|error| FetchFailure::new(entry, error))?;

        Ok(evaluate(&entry.display_name, &snapshot, thresholds))
    }

    /// Fetch one stock's price history and project it into a chart.
    pub async fn chart(
        &self,
        entry: &SymbolEntry,
        period: LookbackPeriod,
    ) -> SymbolOutcome<ChartSeries> {
        debug!(stock = %entry.display_name, symbol = %entry.ticker, %period, "fetching price history");
        let history = self
            .source
            .price_history(&entry.ticker, period)
            .await
            .map_err(|error| FetchFailure::new(entry, error))?;

        Ok(chart(&entry.display_name, &history))
    }
}
