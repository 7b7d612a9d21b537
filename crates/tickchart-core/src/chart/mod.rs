//! Chart adapter.
//!
//! Turns a [`FilteredSeries`] into a [`ChartData`] (title, x labels, four
//! aligned value lists) and passes it to a [`ChartRenderer`]. Volume is not
//! plotted.

mod html;

use std::path::PathBuf;

use serde::Serialize;
use time::macros::format_description;

use crate::{ChartKind, DateRange, FilteredSeries, PriceRow, RenderError, Symbol};

pub use html::HtmlChartRenderer;

/// Series names in plotting order.
pub const SERIES_NAMES: [&str; 4] = ["Open", "High", "Low", "Close"];

/// Presentation knobs shared by both chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartStyle {
    pub x_label_rotation: u16,
    pub truncate_label: usize,
    pub show_legend: bool,
    pub show_minor_x_labels: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            x_label_rotation: 20,
            truncate_label: 10,
            show_legend: true,
            show_minor_x_labels: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// Data handed to a renderer. Every `series[i].values` has the same length
/// as `x_labels`, and entry `j` of each belongs to row `j`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub title: String,
    pub x_labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub style: ChartStyle,
}

impl ChartData {
    /// `None` when `filtered` has no rows.
    pub fn from_series(
        filtered: &FilteredSeries,
        symbol: &Symbol,
        kind: ChartKind,
        range: &DateRange,
    ) -> Option<Self> {
        if filtered.is_empty() {
            return None;
        }

        let rows = filtered.rows();
        let label_format = format_description!("[year]-[month]-[day]");
        let x_labels = rows
            .iter()
            .map(|row| {
                row.date()
                    .format(label_format)
                    .unwrap_or_else(|_| row.date().to_string())
            })
            .collect();

        let column = |pick: fn(&PriceRow) -> f64| -> Vec<f64> { rows.iter().map(pick).collect() };
        let series = vec![
            ChartSeries {
                name: SERIES_NAMES[0],
                values: column(|row| row.open),
            },
            ChartSeries {
                name: SERIES_NAMES[1],
                values: column(|row| row.high),
            },
            ChartSeries {
                name: SERIES_NAMES[2],
                values: column(|row| row.low),
            },
            ChartSeries {
                name: SERIES_NAMES[3],
                values: column(|row| row.close),
            },
        ];

        Some(Self {
            kind,
            title: chart_title(symbol, range),
            x_labels,
            series,
            style: ChartStyle::default(),
        })
    }
}

pub fn chart_title(symbol: &Symbol, range: &DateRange) -> String {
    format!(
        "Stock Data for {symbol}: {} to {}",
        range.start(),
        range.end()
    )
}

/// Where a rendered chart ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderHandle {
    pub path: Option<PathBuf>,
    pub opened: bool,
}

/// Display capability for a finished [`ChartData`].
pub trait ChartRenderer {
    fn render(&self, chart: &ChartData) -> Result<RenderHandle, RenderError>;
}

/// Render `filtered`, or do nothing and return `Ok(None)` when it is empty.
pub fn render(
    renderer: &dyn ChartRenderer,
    filtered: &FilteredSeries,
    symbol: &Symbol,
    kind: ChartKind,
    range: &DateRange,
) -> Result<Option<RenderHandle>, RenderError> {
    let Some(chart) = ChartData::from_series(filtered, symbol, kind, range) else {
        tracing::warn!(symbol = symbol.as_str(), %range, "no data to display");
        return Ok(None);
    };

    tracing::debug!(
        symbol = symbol.as_str(),
        kind = kind.as_str(),
        points = chart.x_labels.len(),
        "rendering chart"
    );
    renderer.render(&chart).map(Some)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use time::macros::datetime;

    use super::*;
    use crate::{PriceSeries, TimeSeriesKind};

    #[derive(Default)]
    struct RecordingRenderer {
        charts: RefCell<Vec<ChartData>>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, chart: &ChartData) -> Result<RenderHandle, RenderError> {
            self.charts.borrow_mut().push(chart.clone());
            Ok(RenderHandle {
                path: None,
                opened: false,
            })
        }
    }

    fn sample() -> (Symbol, PriceSeries) {
        let symbol = Symbol::parse("IBM").expect("valid symbol");
        let rows = vec![
            PriceRow {
                timestamp: datetime!(2024-01-02 16:00),
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5,
                volume: 10.0,
            },
            PriceRow {
                timestamp: datetime!(2024-01-03 16:00),
                open: 1.5,
                high: 2.5,
                low: 1.0,
                close: 2.0,
                volume: 20.0,
            },
        ];
        let series = PriceSeries::from_rows(symbol.clone(), TimeSeriesKind::Daily, rows);
        (symbol, series)
    }

    #[test]
    fn builds_title_labels_and_ordered_series() {
        let (symbol, series) = sample();
        let range = DateRange::parse("2024-01-01", "2024-01-31").expect("valid range");
        let chart = ChartData::from_series(&series.filter(&range), &symbol, ChartKind::Line, &range)
            .expect("rows present");

        assert_eq!(chart.title, "Stock Data for IBM: 2024-01-01 to 2024-01-31");
        assert_eq!(chart.x_labels, vec!["2024-01-02", "2024-01-03"]);
        let names: Vec<&str> = chart.series.iter().map(|series| series.name).collect();
        assert_eq!(names, SERIES_NAMES.to_vec());
        assert_eq!(chart.series[3].values, vec![1.5, 2.0]);
    }

    #[test]
    fn bar_and_line_share_the_same_shape() {
        let (symbol, series) = sample();
        let range = DateRange::parse("2024-01-01", "2024-01-31").expect("valid range");
        let filtered = series.filter(&range);

        let bar = ChartData::from_series(&filtered, &symbol, ChartKind::Bar, &range)
            .expect("rows present");
        let line = ChartData::from_series(&filtered, &symbol, ChartKind::Line, &range)
            .expect("rows present");

        assert_eq!(bar.x_labels, line.x_labels);
        assert_eq!(bar.series, line.series);
        assert_ne!(bar.kind, line.kind);
    }

    #[test]
    fn empty_series_skips_renderer() {
        let (symbol, series) = sample();
        let range = DateRange::parse("2020-01-01", "2020-12-31").expect("valid range");
        let renderer = RecordingRenderer::default();

        let handle = render(
            &renderer,
            &series.filter(&range),
            &symbol,
            ChartKind::Bar,
            &range,
        )
        .expect("no-op render succeeds");

        assert!(handle.is_none());
        assert!(renderer.charts.borrow().is_empty());
    }
}
