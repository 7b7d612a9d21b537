//! Boolean input checks used by the prompt flow.
//!
//! Each predicate accepts exactly what the matching typed parser accepts, so
//! a `true` here guarantees the parser will succeed.

use crate::{parse_date, ChartKind, Interval, Symbol, TimeSeriesKind};

/// `^[A-Z]{1,7}$`
pub fn validate_symbol(input: &str) -> bool {
    Symbol::parse(input).is_ok()
}

/// `"1"` or `"2"`.
pub fn validate_chart_type(input: &str) -> bool {
    ChartKind::from_selector(input).is_ok()
}

/// `"1"` through `"4"`.
pub fn validate_time_series(input: &str) -> bool {
    TimeSeriesKind::from_selector(input).is_ok()
}

/// `"1"` through `"5"`.
pub fn validate_interval(input: &str) -> bool {
    Interval::from_selector(input).is_ok()
}

/// Exact `YYYY-MM-DD` naming a real calendar day.
pub fn validate_date(input: &str) -> bool {
    parse_date(input).is_ok()
}
