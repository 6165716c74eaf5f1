//! # Domain Models
//!
//! Canonical domain types for ferroscreen.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, exchange-qualified ticker |
//! | [`FundamentalsSnapshot`] | Raw provider ratios, each optional |
//! | [`PriceHistory`] | Daily bars over a lookback window |
//! | [`HistoryBar`] | One provider bar with close and adjusted close |
//! | [`PricePoint`] | Chartable `(date, adjusted close)` pair |
//! | [`LookbackPeriod`] | History window (1mo, 3mo, 6mo, 1y) |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Provider values that are not finite are stored as absent. A reported zero
//! stays a zero.

mod models;
mod period;
mod symbol;
mod timestamp;

pub use models::{FundamentalsSnapshot, HistoryBar, PriceHistory, PricePoint};
pub use period::LookbackPeriod;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
