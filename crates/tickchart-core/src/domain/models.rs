use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

use crate::{DateRange, Symbol, TimeSeriesKind};

/// One OHLCV observation as reported by the API.
///
/// Volume is kept as `f64` because the API is decoded column-wise into floats;
/// it is carried along but never plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub timestamp: PrimitiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceRow {
    pub fn date(&self) -> Date {
        self.timestamp.date()
    }
}

/// Rows for one symbol, strictly ascending by timestamp. Only built through
/// [`PriceSeries::from_rows`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub kind: TimeSeriesKind,
    rows: Vec<PriceRow>,
}

impl PriceSeries {
    /// Build a series from rows in any order.
    ///
    /// Rows are keyed by timestamp; when two rows share a timestamp the later
    /// one in `rows` wins.
    pub fn from_rows(
        symbol: Symbol,
        kind: TimeSeriesKind,
        rows: impl IntoIterator<Item = PriceRow>,
    ) -> Self {
        let keyed: BTreeMap<PrimitiveDateTime, PriceRow> =
            rows.into_iter().map(|row| (row.timestamp, row)).collect();

        Self {
            symbol,
            kind,
            rows: keyed.into_values().collect(),
        }
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose calendar date lies inside `range`, order preserved.
    ///
    /// The end bound is a whole day: intraday rows at any time on
    /// `range.end()` are kept, not only those stamped at midnight.
    pub fn filter(&self, range: &DateRange) -> FilteredSeries {
        FilteredSeries {
            symbol: self.symbol.clone(),
            range: *range,
            rows: self
                .rows
                .iter()
                .filter(|row| range.contains(row.date()))
                .copied()
                .collect(),
        }
    }
}

/// Sub-sequence of a [`PriceSeries`] restricted to a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredSeries {
    pub symbol: Symbol,
    pub range: DateRange,
    rows: Vec<PriceRow>,
}

impl FilteredSeries {
    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrow further. Filtering by the same range again is a no-op.
    pub fn filter(&self, range: &DateRange) -> FilteredSeries {
        FilteredSeries {
            symbol: self.symbol.clone(),
            range: *range,
            rows: self
                .rows
                .iter()
                .filter(|row| range.contains(row.date()))
                .copied()
                .collect(),
        }
    }
}
