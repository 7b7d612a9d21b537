use crate::adapters::AlphaVantageClient;
use crate::chart::{self, ChartRenderer, RenderHandle};
use crate::{ChartQuery, CoreError, FilteredSeries};

/// Rows fetched for a query, already narrowed to its date range.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedQuery {
    /// Rows returned by the API.
    pub fetched: usize,
    pub filtered: FilteredSeries,
}

impl FetchedQuery {
    /// Rows inside the requested date range.
    pub fn displayed(&self) -> usize {
        self.filtered.len()
    }
}

/// Outcome of one fetch-filter-render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    /// Rows returned by the API.
    pub fetched: usize,
    /// Rows inside the requested date range.
    pub displayed: usize,
    /// `None` when nothing fell inside the range and rendering was skipped.
    pub handle: Option<RenderHandle>,
}

/// Fetch one query and keep the rows inside its range.
///
/// A fetch that returns zero rows is [`CoreError::EmptyResult`]. A range that
/// matches zero rows is not an error.
pub async fn fetch_filtered(
    client: &AlphaVantageClient,
    query: &ChartQuery,
) -> Result<FetchedQuery, CoreError> {
    let series = client.fetch(&query.symbol, query.series).await?;
    if series.is_empty() {
        tracing::warn!(symbol = query.symbol.as_str(), "fetch returned no rows");
        return Err(CoreError::EmptyResult {
            symbol: query.symbol.clone(),
        });
    }

    let filtered = series.filter(&query.range);
    tracing::info!(
        symbol = query.symbol.as_str(),
        fetched = series.len(),
        displayed = filtered.len(),
        range = %query.range,
        "filtered series"
    );

    Ok(FetchedQuery {
        fetched: series.len(),
        filtered,
    })
}

/// Draw the filtered rows of `fetched`. `Ok(None)` when there is nothing to draw.
pub fn render_fetched(
    renderer: &dyn ChartRenderer,
    query: &ChartQuery,
    fetched: &FetchedQuery,
) -> Result<Option<RenderHandle>, CoreError> {
    let handle = chart::render(
        renderer,
        &fetched.filtered,
        &query.symbol,
        query.chart,
        &query.range,
    )?;
    Ok(handle)
}

/// Fetch, filter and render one query.
pub async fn run_query(
    client: &AlphaVantageClient,
    renderer: &dyn ChartRenderer,
    query: &ChartQuery,
) -> Result<QueryReport, CoreError> {
    let fetched = fetch_filtered(client, query).await?;
    let handle = render_fetched(renderer, query, &fetched)?;

    Ok(QueryReport {
        fetched: fetched.fetched,
        displayed: fetched.displayed(),
        handle,
    })
}
