use std::sync::Arc;

use serde::Serialize;

use ferroscreen_core::{
    DataSource, ScreenReport, ScreenWarning, Screener, SymbolRegistry, ThresholdSelection,
    WarningSection,
};

use crate::cli::ScreenArgs;
use crate::error::CliError;

use super::{CommandData, CommandResult};

#[derive(Debug, Serialize)]
pub struct ScreenData {
    pub selected: Vec<String>,
    pub thresholds: ThresholdSelection,
    #[serde(skip)]
    pub charts_enabled: bool,
    #[serde(flatten)]
    pub report: ScreenReport,
}

pub async fn run(
    args: &ScreenArgs,
    registry: &SymbolRegistry,
    source: Arc<dyn DataSource>,
) -> Result<CommandResult, CliError> {
    let thresholds = args.thresholds()?;
    let names = if args.stocks.is_empty() {
        registry.default_selection()
    } else {
        args.stocks.clone()
    };
    let selection = registry.select(&names)?;

    let source_id = source.id();
    let screener = Screener::new(source).with_charts(!args.no_charts);
    let report = screener.render(&selection, &thresholds).await;

    let warnings = report.warnings.iter().map(warning_text).collect();
    let data = ScreenData {
        selected: selection
            .entries()
            .iter()
            .map(|entry| entry.display_name.clone())
            .collect(),
        thresholds,
        charts_enabled: !args.no_charts,
        report,
    };

    Ok(CommandResult::ok(CommandData::Screen(data), source_id).with_warnings(warnings))
}

/// User-facing line for a per-stock failure.
pub fn warning_text(warning: &ScreenWarning) -> String {
    match warning.section {
        WarningSection::Fundamentals => {
            format!("Could not load data for {}: {}", warning.stock, warning.message)
        }
        WarningSection::Chart => {
            format!("Error fetching chart for {}: {}", warning.stock, warning.message)
        }
    }
}
