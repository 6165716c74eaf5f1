use thiserror::Error;

/// Validation and contract errors exposed by `ferroscreen-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("display name cannot be empty")]
    EmptyDisplayName,
    #[error("display name '{name}' is registered more than once")]
    DuplicateDisplayName { name: String },

    #[error("invalid period '{value}', expected one of 1mo, 3mo, 6mo, 1y")]
    InvalidPeriod { value: String },

    #[error("threshold '{field}' must be finite")]
    NonFiniteThreshold { field: &'static str },
    #[error("threshold '{field}' = {value} is outside the allowed range {min}..={max}")]
    ThresholdOutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{range} range is inverted: min {min} is greater than max {max}")]
    InvertedRange {
        range: &'static str,
        min: f64,
        max: f64,
    },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("trace_id must be 32 hex characters")]
    InvalidTraceId,
    #[error("source_chain must contain at least one source")]
    EmptySourceChain,
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Failures raised while preparing a render cycle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScreenError {
    #[error("unknown stock '{name}'")]
    UnknownSymbol { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Screen(#[from] ScreenError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
