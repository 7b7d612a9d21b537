//! # Domain Models
//!
//! Types for one chart query and the data it produces.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker, 1-7 uppercase letters |
//! | [`ChartKind`] | Bar or line |
//! | [`TimeSeriesKind`] | Intraday (with [`Interval`]), daily, weekly, monthly |
//! | [`DateRange`] | Inclusive range, `2000-01-01 <= start < end` |
//! | [`PriceRow`] | One OHLCV observation |
//! | [`PriceSeries`] | Ascending, timestamp-unique rows for a symbol |
//! | [`FilteredSeries`] | Rows of a series inside a [`DateRange`] |
//! | [`ChartQuery`] | A complete user selection |
//!
//! Every constructor validates its input, so a value that exists is valid.

mod date_range;
mod interval;
mod models;
mod query;
mod selection;
mod symbol;

pub use date_range::{check_min_date, parse_date, DateRange, MIN_DATE};
pub use interval::Interval;
pub use models::{FilteredSeries, PriceRow, PriceSeries};
pub use query::ChartQuery;
pub use selection::{ChartKind, TimeSeriesKind};
pub use symbol::{Symbol, MAX_SYMBOL_LEN};
