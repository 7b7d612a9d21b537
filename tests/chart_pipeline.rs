//! Behavior tests for the filter, chart adapter and full query cycle.

mod common;

use std::sync::Arc;

use common::{client_with, RecordingHttpClient, RecordingRenderer, FIVE_DAYS, HEADER};
use tickchart_core::chart::{self, ChartData, SERIES_NAMES};
use tickchart_core::{
    fetch_filtered, parse_csv, render_fetched, run_query, ChartKind, ChartQuery, CoreError,
    DateRange, FetchError, PriceSeries, Symbol, TimeSeriesKind,
};

fn ibm() -> Symbol {
    Symbol::parse("IBM").expect("valid symbol")
}

fn five_days() -> PriceSeries {
    parse_csv(&ibm(), TimeSeriesKind::Daily, FIVE_DAYS).expect("fixture parses")
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).expect("valid range")
}

// =============================================================================
// Selector/Filter
// =============================================================================

#[test]
fn filtering_twice_by_the_same_range_changes_nothing() {
    let series = five_days();
    let window = range("2024-01-02", "2024-01-04");

    let once = series.filter(&window);
    let twice = once.filter(&window);

    assert_eq!(once, twice);
    assert_eq!(once.len(), 3);
}

#[test]
fn disjoint_range_yields_empty_series_and_no_render() {
    let series = five_days();
    let window = range("2023-01-01", "2023-12-31");
    let renderer = RecordingRenderer::default();

    let filtered = series.filter(&window);
    assert!(filtered.is_empty());

    let handle = chart::render(&renderer, &filtered, &ibm(), ChartKind::Line, &window)
        .expect("empty input is not an error");
    assert!(handle.is_none());
    assert!(renderer.charts.borrow().is_empty());
}

// =============================================================================
// Chart Adapter
// =============================================================================

#[test]
fn rows_two_to_four_become_three_labels_and_four_aligned_series() {
    let series = five_days();
    let window = range("2024-01-02", "2024-01-04");
    let renderer = RecordingRenderer::default();

    chart::render(
        &renderer,
        &series.filter(&window),
        &ibm(),
        ChartKind::Bar,
        &window,
    )
    .expect("render should succeed");

    let charts = renderer.charts.borrow();
    assert_eq!(charts.len(), 1);
    let ChartData {
        kind,
        title,
        x_labels,
        series,
        ..
    } = &charts[0];

    assert_eq!(*kind, ChartKind::Bar);
    assert_eq!(title, "Stock Data for IBM: 2024-01-02 to 2024-01-04");
    assert_eq!(x_labels, &vec!["2024-01-02", "2024-01-03", "2024-01-04"]);

    let names: Vec<&str> = series.iter().map(|series| series.name).collect();
    assert_eq!(names, SERIES_NAMES.to_vec());
    assert!(series.iter().all(|series| series.values.len() == 3));

    assert_eq!(series[0].values, vec![12.0, 13.0, 14.0]);
    assert_eq!(series[1].values, vec![12.5, 13.5, 14.5]);
    assert_eq!(series[2].values, vec![11.5, 12.5, 13.5]);
    assert_eq!(series[3].values, vec![12.2, 13.2, 14.2]);
}

// =============================================================================
// Full cycle
// =============================================================================

#[tokio::test]
async fn query_cycle_reports_fetched_and_displayed_counts() {
    let client = client_with(Arc::new(RecordingHttpClient::body(FIVE_DAYS)));
    let renderer = RecordingRenderer::default();
    let query = ChartQuery::from_selectors("IBM", "2", "2", None, "2024-01-03", "2024-01-31")
        .expect("valid query");

    let report = run_query(&client, &renderer, &query)
        .await
        .expect("cycle should succeed");

    assert_eq!(report.fetched, 5);
    assert_eq!(report.displayed, 3);
    assert!(report.handle.is_some());
    assert_eq!(renderer.charts.borrow()[0].kind, ChartKind::Line);
}

#[tokio::test]
async fn counts_are_known_before_anything_is_rendered() {
    let client = client_with(Arc::new(RecordingHttpClient::body(FIVE_DAYS)));
    let renderer = RecordingRenderer::default();
    let query = ChartQuery::from_selectors("IBM", "1", "2", None, "2024-01-02", "2024-01-04")
        .expect("valid query");

    let fetched = fetch_filtered(&client, &query)
        .await
        .expect("fetch should succeed");
    assert_eq!(fetched.fetched, 5);
    assert_eq!(fetched.displayed(), 3);
    assert!(renderer.charts.borrow().is_empty());

    let handle = render_fetched(&renderer, &query, &fetched).expect("render should succeed");
    assert!(handle.is_some());
    assert_eq!(renderer.charts.borrow()[0].x_labels.len(), 3);
}

#[tokio::test]
async fn query_cycle_with_no_rows_in_range_skips_rendering() {
    let client = client_with(Arc::new(RecordingHttpClient::body(FIVE_DAYS)));
    let renderer = RecordingRenderer::default();
    let query = ChartQuery::from_selectors("IBM", "1", "2", None, "2010-01-01", "2010-02-01")
        .expect("valid query");

    let report = run_query(&client, &renderer, &query)
        .await
        .expect("empty range is not a failure");

    assert_eq!(report.fetched, 5);
    assert_eq!(report.displayed, 0);
    assert!(report.handle.is_none());
    assert!(renderer.charts.borrow().is_empty());
}

#[tokio::test]
async fn query_cycle_with_no_rows_fetched_is_empty_result() {
    let client = client_with(Arc::new(RecordingHttpClient::body(HEADER)));
    let renderer = RecordingRenderer::default();
    let query = ChartQuery::from_selectors("IBM", "1", "3", None, "2024-01-01", "2024-02-01")
        .expect("valid query");

    let error = run_query(&client, &renderer, &query)
        .await
        .expect_err("nothing fetched");

    assert!(matches!(error, CoreError::EmptyResult { ref symbol } if symbol.as_str() == "IBM"));
    assert!(renderer.charts.borrow().is_empty());
}

#[tokio::test]
async fn query_cycle_surfaces_network_failure() {
    let client = client_with(Arc::new(RecordingHttpClient::transport_error("request timeout")));
    let renderer = RecordingRenderer::default();
    let query = ChartQuery::from_selectors("IBM", "1", "4", None, "2024-01-01", "2024-02-01")
        .expect("valid query");

    let error = run_query(&client, &renderer, &query)
        .await
        .expect_err("transport failed");

    assert!(matches!(
        error,
        CoreError::Fetch(FetchError::Network { .. })
    ));
}
