//! CLI argument definitions for ferroscreen.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `screen` | Filter selected stocks by ratios and chart their prices |
//! | `symbols` | List the screenable stocks |
//! | `history` | Chart one stock's adjusted close |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--offline` | `false` | Use built-in demo data instead of Yahoo Finance |
//! | `-v` | errors only | Raise log verbosity (repeatable) |
//!
//! # Examples
//!
//! ```bash
//! ferroscreen screen --stock Reliance --stock Infosys --pe-max 30
//! ferroscreen screen --stock TCS --min-roe 20 --format json --pretty
//! ferroscreen history "HDFC Bank" --period 1y
//! ```

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use ferroscreen_core::ThresholdSelection;

/// Ratio screener for NSE large caps.
#[derive(Debug, Parser)]
#[command(
    name = "ferroscreen",
    author,
    version,
    about = "Screen NSE large caps by P/E, P/B, dividend yield and ROE",
    long_about = "ferroscreen fetches fundamentals for a fixed set of NSE stocks, keeps the ones \
whose P/E, P/B, dividend yield and return on equity fall within your thresholds, and charts \
six months of adjusted closing prices for every selected stock.\n\
\n\
Use 'ferroscreen <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Use deterministic demo data instead of Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tables and terminal charts.
    Table,
    /// Single JSON envelope.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the selected stocks and chart their last six months.
    ///
    /// # Examples
    ///
    ///   ferroscreen screen
    ///   ferroscreen screen --stock TCS --stock Wipro --pe-max 35 --min-roe 15
    Screen(ScreenArgs),

    /// List screenable stocks and their tickers.
    Symbols,

    /// Chart one stock's adjusted close.
    ///
    /// # Examples
    ///
    ///   ferroscreen history Reliance
    ///   ferroscreen history "Bharti Airtel" --period 3mo
    History(HistoryArgs),
}

/// Arguments for the `screen` command.
#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Stock display name (repeatable). Defaults to Reliance.
    #[arg(long = "stock", value_name = "NAME")]
    pub stocks: Vec<String>,

    /// Minimum trailing P/E (0-100).
    #[arg(long, default_value_t = ThresholdSelection::default().pe_min)]
    pub pe_min: f64,

    /// Maximum trailing P/E (0-100).
    #[arg(long, default_value_t = ThresholdSelection::default().pe_max)]
    pub pe_max: f64,

    /// Minimum price to book (0-20).
    #[arg(long, default_value_t = ThresholdSelection::default().pb_min)]
    pub pb_min: f64,

    /// Maximum price to book (0-20).
    #[arg(long, default_value_t = ThresholdSelection::default().pb_max)]
    pub pb_max: f64,

    /// Minimum dividend yield in percent (0-10).
    #[arg(long, default_value_t = ThresholdSelection::default().dividend_yield_min)]
    pub min_dividend_yield: f64,

    /// Minimum return on equity in percent (0-50).
    #[arg(long, default_value_t = ThresholdSelection::default().roe_min)]
    pub min_roe: f64,

    /// Skip price history and charts.
    #[arg(long, default_value_t = false)]
    pub no_charts: bool,
}

impl ScreenArgs {
    pub fn thresholds(&self) -> Result<ThresholdSelection, ferroscreen_core::ValidationError> {
        ThresholdSelection::new(
            self.pe_min,
            self.pe_max,
            self.pb_min,
            self.pb_max,
            self.min_dividend_yield,
            self.min_roe,
        )
    }
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Stock display name, e.g. "HDFC Bank".
    pub stock: String,

    /// Lookback window: 1mo, 3mo, 6mo or 1y.
    #[arg(long, default_value = "6mo")]
    pub period: String,
}
