//! Data source trait and its error type.
//!
//! A [`DataSource`] answers the two questions the screener asks per stock:
//!
//! | Method | Response | Description |
//! |--------|----------|-------------|
//! | [`fundamentals`](DataSource::fundamentals) | [`FundamentalsSnapshot`] | P/E, P/B, dividend yield, ROE |
//! | [`price_history`](DataSource::price_history) | [`PriceHistory`] | Daily bars over a lookback window |
//!
//! # Example
//!
//! ```rust,ignore
//! use ferroscreen_core::{DataSource, LookbackPeriod, Symbol, YahooAdapter};
//!
//! async fn show(adapter: &YahooAdapter) -> Result<(), Box<dyn std::error::Error>> {
//!     let symbol = Symbol::parse("INFY.NS")?;
//!     let snapshot = adapter.fundamentals(&symbol).await?;
//!     println!("P/E: {:?}", snapshot.trailing_pe);
//!
//!     let history = adapter.price_history(&symbol, LookbackPeriod::SixMonths).await?;
//!     println!("{} bars", history.bars.len());
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{FundamentalsSnapshot, LookbackPeriod, PriceHistory, ProviderId, Symbol};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured failure of a single provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the same call might succeed later. Informational only; the
    /// screener never retries.
    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Boxed future returned by [`DataSource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// Market data provider contract.
///
/// Implementations must be `Send + Sync`. Each call is one best-effort
/// request: no caching, no retries.
pub trait DataSource: Send + Sync {
    /// Returns the provider identifier reported in envelopes.
    fn id(&self) -> ProviderId;

    /// Fetches the current fundamentals snapshot for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the provider is unreachable, rate limits
    /// the call, does not know the ticker, or answers with an unreadable body.
    fn fundamentals<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, FundamentalsSnapshot>;

    /// Fetches daily price history for `symbol` over `period`.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`fundamentals`](DataSource::fundamentals).
    fn price_history<'a>(
        &'a self,
        symbol: &'a Symbol,
        period: LookbackPeriod,
    ) -> SourceFuture<'a, PriceHistory>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_follow_kind() {
        assert_eq!(SourceError::unavailable("down").code(), "source.unavailable");
        assert_eq!(SourceError::rate_limited("slow").code(), "source.rate_limited");
        assert_eq!(
            SourceError::invalid_request("bad").code(),
            "source.invalid_request"
        );
        assert_eq!(SourceError::internal("oops").code(), "source.internal");
    }

    #[test]
    fn display_includes_message_and_code() {
        let error = SourceError::rate_limited("yahoo returned status 429");
        assert_eq!(
            error.to_string(),
            "yahoo returned status 429 (source.rate_limited)"
        );
        assert!(error.retryable());
    }
}
