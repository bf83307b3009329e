//! Error types for the chart analysis system.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level analysis error.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Price loader errors.
///
/// `Unavailable` and `InvalidRange` are propagated unchanged from the
/// loader to the caller; the core does not retry or recover from them.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("no data available for the requested range")]
    Unavailable,

    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("timestamps must be strictly increasing: {prev} followed by {next}")]
    NonMonotonic { prev: i64, next: i64 },

    #[error("series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Indicator parameter and history errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("insufficient history: need {required} points, have {available}")]
    InsufficientHistory { required: usize, available: usize },
}

/// Signal generation errors.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("buy and sell conditions both held at timestamp {timestamp}")]
    Conflict { timestamp: i64 },

    #[error("{series} series has {actual} points, price series has {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for analysis operations.
pub type ChartResult<T> = Result<T, ChartError>;
