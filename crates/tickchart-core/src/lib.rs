//! # tickchart core
//!
//! Everything between raw user input and a drawn chart:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`validate`] | Boolean checks for prompt input |
//! | [`domain`] | Symbol, selections, date range, price rows and series |
//! | [`adapters`] | Alpha Vantage CSV fetcher |
//! | [`http_client`] | HTTP transport trait and reqwest implementation |
//! | [`config`] | Fetcher configuration and API key handling |
//! | [`chart`] | Chart data shaping and the HTML renderer |
//! | [`pipeline`] | One fetch-filter-render cycle |
//! | [`error`] | Error taxonomy |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickchart_core::{
//!     run_query, AlphaVantageClient, ApiKey, ChartQuery, FetchConfig, HtmlChartRenderer,
//! };
//!
//! let query = ChartQuery::from_selectors("IBM", "2", "2", None, "2024-01-01", "2024-03-01")?;
//! let client = AlphaVantageClient::new(FetchConfig::new(ApiKey::demo()));
//! let report = run_query(&client, &HtmlChartRenderer::default(), &query).await?;
//! println!("{} of {} rows plotted", report.displayed, report.fetched);
//! ```

pub mod adapters;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pipeline;
pub mod validate;

pub use adapters::{parse_csv, AlphaVantageClient};
pub use chart::{ChartData, ChartRenderer, ChartSeries, ChartStyle, HtmlChartRenderer, RenderHandle};
pub use config::{ApiKey, FetchConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEMO_API_KEY};
pub use domain::{
    check_min_date, parse_date, ChartKind, ChartQuery, DateRange, FilteredSeries, Interval,
    PriceRow, PriceSeries, Symbol, TimeSeriesKind, MIN_DATE,
};
pub use error::{CoreError, FetchError, RenderError, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use pipeline::{fetch_filtered, render_fetched, run_query, FetchedQuery, QueryReport};
pub use validate::{
    validate_chart_type, validate_date, validate_interval, validate_symbol, validate_time_series,
};
