use std::path::PathBuf;

use thiserror::Error;
use time::Date;

use crate::Symbol;

/// Rejected user input. Always recoverable by asking again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must contain only uppercase letters A-Z: '{value}'")]
    SymbolInvalidChars { value: String },

    #[error("invalid chart type '{value}', expected 1 (bar) or 2 (line)")]
    InvalidChartType { value: String },
    #[error("invalid time series '{value}', expected one of 1, 2, 3, 4")]
    InvalidTimeSeries { value: String },
    #[error("invalid interval '{value}', expected one of 1, 2, 3, 4, 5")]
    InvalidInterval { value: String },

    #[error("date must use the YYYY-MM-DD format: '{value}'")]
    InvalidDate { value: String },
    #[error("date {date} is before the earliest supported date {min}")]
    DateTooEarly { date: Date, min: Date },
    #[error("start date {start} must be earlier than end date {end}")]
    StartNotBeforeEnd { start: Date, end: Date },
}

/// Failure while retrieving or decoding a price series.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("API request failed: {message}")]
    Network { message: String },
    #[error("unexpected data format from API: {message}")]
    Format { message: String },
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}

/// Failure while writing or displaying a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize chart: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write chart to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open chart in browser: {0}")]
    Browser(#[source] std::io::Error),
}

/// Top-level error type for one query cycle.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no data fetched for {symbol}")]
    EmptyResult { symbol: Symbol },

    #[error(transparent)]
    Render(#[from] RenderError),
}
