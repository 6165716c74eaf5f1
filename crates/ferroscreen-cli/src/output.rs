pub mod chart;

use std::io::{self, Write};

use ferroscreen_core::{Envelope, EnvelopeError, FilteredRow, WarningSection};

use crate::cli::OutputFormat;
use crate::commands::{warning_text, CommandData, HistoryData, ScreenData, SymbolsData};
use crate::error::CliError;

const EMPTY_RESULT: &str = "No stocks matched your filters.";

pub fn render(
    envelope: &Envelope<CommandData>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(&mut out, envelope, chart::terminal_width())?,
    }

    Ok(())
}

fn render_table<W: Write>(
    out: &mut W,
    envelope: &Envelope<CommandData>,
    width: u16,
) -> io::Result<()> {
    match &envelope.data {
        CommandData::Screen(data) => render_screen(out, data, width),
        CommandData::Symbols(data) => render_symbols(out, data),
        CommandData::History(data) => render_history(out, data, &envelope.errors, width),
    }
}

fn render_screen<W: Write>(out: &mut W, data: &ScreenData, width: u16) -> io::Result<()> {
    let report = &data.report;

    writeln!(out, "Filtered Stock Table")?;
    if report.rows.is_empty() {
        writeln!(out, "{EMPTY_RESULT}")?;
    } else {
        for line in stock_table(&report.rows) {
            writeln!(out, "{line}")?;
        }
    }
    for warning in report.warnings_for(WarningSection::Fundamentals) {
        writeln!(out, "warning: {}", warning_text(warning))?;
    }

    if !data.charts_enabled {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Stock Price Charts")?;
    for stock in &data.selected {
        if let Some(series) = report.charts.iter().find(|series| &series.stock == stock) {
            for line in chart::render_lines(series, width) {
                writeln!(out, "{line}")?;
            }
        } else if let Some(warning) = report
            .warnings_for(WarningSection::Chart)
            .find(|warning| &warning.stock == stock)
        {
            writeln!(out, "error: {}", warning_text(warning))?;
        }
    }

    Ok(())
}

fn render_symbols<W: Write>(out: &mut W, data: &SymbolsData) -> io::Result<()> {
    let rows: Vec<Vec<String>> = data
        .symbols
        .iter()
        .map(|entry| {
            let marker = if data.default_selection.contains(&entry.display_name) {
                "*"
            } else {
                ""
            };
            vec![
                entry.display_name.clone(),
                entry.ticker.to_string(),
                marker.to_owned(),
            ]
        })
        .collect();

    for line in format_table(&["Stock", "Ticker", "Default"], &rows, &[false, false, false]) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn render_history<W: Write>(
    out: &mut W,
    data: &HistoryData,
    errors: &[EnvelopeError],
    width: u16,
) -> io::Result<()> {
    if let Some(series) = &data.chart {
        for line in chart::render_lines(series, width) {
            writeln!(out, "{line}")?;
        }
    }
    for error in errors {
        writeln!(
            out,
            "error: Error fetching chart for {}: {} ({})",
            data.stock, error.message, error.code
        )?;
    }
    Ok(())
}

/// Result table with two-decimal values.
pub fn stock_table(rows: &[FilteredRow]) -> Vec<String> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.stock.clone(),
                format!("{:.2}", row.pe),
                format!("{:.2}", row.pb),
                format!("{:.2}", row.roe_percent),
                format!("{:.2}", row.dividend_yield_percent),
            ]
        })
        .collect();

    format_table(
        &["Stock", "P/E", "P/B", "ROE (%)", "Dividend Yield (%)"],
        &cells,
        &[false, true, true, true, true],
    )
}

fn format_table(headers: &[&str], rows: &[Vec<String>], right_align: &[bool]) -> Vec<String> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let pad = |column: usize, cell: &str| {
        let width = widths[column];
        if right_align.get(column).copied().unwrap_or(false) {
            format!("{cell:>width$}")
        } else {
            format!("{cell:<width$}")
        }
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(
        headers
            .iter()
            .enumerate()
            .map(|(column, header)| pad(column, header))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_owned(),
    );
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(
            row.iter()
                .enumerate()
                .map(|(column, cell)| pad(column, cell))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_owned(),
        );
    }
    lines
}
