use std::sync::Arc;

use serde::Serialize;

use ferroscreen_core::{
    ChartSeries, DataSource, EnvelopeError, LookbackPeriod, Screener, Symbol, SymbolRegistry,
};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::{CommandData, CommandResult};

#[derive(Debug, Serialize)]
pub struct HistoryData {
    pub stock: String,
    pub symbol: Symbol,
    pub period: LookbackPeriod,
    pub chart: Option<ChartSeries>,
}

pub async fn run(
    args: &HistoryArgs,
    registry: &SymbolRegistry,
    source: Arc<dyn DataSource>,
) -> Result<CommandResult, CliError> {
    let period: LookbackPeriod = args.period.parse()?;
    let entry = registry.lookup(&args.stock)?;
    let source_id = source.id();

    let screener = Screener::new(source);
    match screener.chart(entry, period).await {
        Ok(chart) => {
            let data = HistoryData {
                stock: entry.display_name.clone(),
                symbol: entry.ticker.clone(),
                period,
                chart: Some(chart),
            };
            Ok(CommandResult::ok(CommandData::History(data), source_id))
        }
        Err(failure) => {
            tracing::warn!(%failure, "price history unavailable");
            let error = EnvelopeError::from_source_error(&failure.error, source_id);
            let data = HistoryData {
                stock: failure.stock,
                symbol: failure.symbol,
                period,
                chart: None,
            };
            Ok(CommandResult::ok(CommandData::History(data), source_id).with_error(error))
        }
    }
}
