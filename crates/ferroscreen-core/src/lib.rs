//! # Ferroscreen Core
//!
//! Domain types and screening logic for the `ferroscreen` NSE fundamentals
//! screener.
//!
//! ## Overview
//!
//! - **Symbol registry** mapping company display names to exchange tickers
//! - **Threshold selection** with fixed control bounds
//! - **Filter engine** that scales, filters and rounds provider ratios
//! - **Price projection** from daily history to chartable adjusted closes
//! - **Data source trait** with Yahoo Finance and fixture adapters
//! - **Screener** running one render cycle with per-stock failure isolation
//! - **Response envelope** for machine-readable output
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo, fixture) |
//! | [`data_source`] | Data source trait and its error type |
//! | [`domain`] | Domain models (Symbol, FundamentalsSnapshot, PriceHistory) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`filter`] | Normalization, threshold filtering and row shaping |
//! | [`http_client`] | HTTP client abstraction |
//! | [`projection`] | Price history to chart series |
//! | [`registry`] | Display name to ticker registry and selections |
//! | [`screener`] | Render-cycle orchestration |
//! | [`source`] | Provider identifiers |
//! | [`thresholds`] | Threshold selection and control bounds |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ferroscreen_core::{Screener, SymbolRegistry, ThresholdSelection, YahooAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = SymbolRegistry::nse()?;
//!     let selection = registry.select(["Reliance", "Infosys"])?;
//!
//!     let screener = Screener::new(Arc::new(YahooAdapter::from_env()?));
//!     let report = screener.render(&selection, &ThresholdSelection::default()).await;
//!
//!     for row in &report.rows {
//!         println!("{}: P/E {:.2}", row.stock, row.pe);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Provider failures are values, not aborts: the screener turns each failed
//! call into a [`ScreenWarning`] and carries on with the next stock.
//!
//! ```rust
//! use ferroscreen_core::{SourceError, SourceErrorKind};
//!
//! fn describe(error: &SourceError) -> &'static str {
//!     match error.kind() {
//!         SourceErrorKind::RateLimited => "try again later",
//!         SourceErrorKind::InvalidRequest => "unknown ticker",
//!         _ => "provider unavailable",
//!     }
//! }
//! ```

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod projection;
pub mod registry;
pub mod screener;
pub mod source;
pub mod thresholds;

// Adapter implementations
pub use adapters::{FixtureCall, FixtureRatios, FixtureSource, YahooAdapter};

// Data source trait and types
pub use data_source::{DataSource, SourceError, SourceErrorKind};

// Domain models
pub use domain::{
    FundamentalsSnapshot, HistoryBar, LookbackPeriod, PriceHistory, PricePoint, Symbol,
    UtcDateTime,
};

// Envelope types
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};

// Error types
pub use error::{CoreError, ScreenError, ValidationError};

// Filter engine
pub use filter::{CompleteMetrics, FilteredRow, NormalizedMetrics};

// HTTP client types
pub use http_client::{HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Projection
pub use projection::ChartSeries;

// Registry
pub use registry::{Selection, SymbolEntry, SymbolRegistry};

// Screener
pub use screener::{
    FetchFailure, ScreenReport, ScreenWarning, Screener, SymbolOutcome, WarningSection,
    SCREEN_PERIOD,
};

// Source identifiers
pub use source::ProviderId;

// Thresholds
pub use thresholds::{ControlBounds, ThresholdSelection};
