use serde::{Deserialize, Serialize};

use crate::{ChartKind, DateRange, Interval, Symbol, TimeSeriesKind, ValidationError};

/// Everything needed to fetch, filter and draw one chart.
///
/// Each field validates itself on deserialize, so a decoded query holds the
/// same guarantees as one built with [`ChartQuery::from_selectors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartQuery {
    pub symbol: Symbol,
    pub chart: ChartKind,
    pub series: TimeSeriesKind,
    pub range: DateRange,
}

impl ChartQuery {
    pub fn new(symbol: Symbol, chart: ChartKind, series: TimeSeriesKind, range: DateRange) -> Self {
        Self {
            symbol,
            chart,
            series,
            range,
        }
    }

    /// Build a query from raw menu selectors and date strings.
    ///
    /// `interval` is only consulted for intraday series; `None` keeps the
    /// default interval.
    pub fn from_selectors(
        symbol: &str,
        chart: &str,
        series: &str,
        interval: Option<&str>,
        start: &str,
        end: &str,
    ) -> Result<Self, ValidationError> {
        let symbol = Symbol::parse(symbol)?;
        let chart = ChartKind::from_selector(chart)?;

        let mut series = TimeSeriesKind::from_selector(series)?;
        if series.is_intraday() {
            if let Some(interval) = interval {
                series = series.with_interval(Interval::from_selector(interval)?);
            }
        }

        Ok(Self::new(symbol, chart, series, DateRange::parse(start, end)?))
    }
}
