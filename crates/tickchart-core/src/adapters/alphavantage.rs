use std::sync::Arc;

use serde::Deserialize;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::config::FetchConfig;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{FetchError, PriceRow, PriceSeries, Symbol, TimeSeriesKind};

/// Columns every response must carry. Order is free and extra columns are
/// ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

/// Alpha Vantage time series client. One request per call, no retries.
#[derive(Clone)]
pub struct AlphaVantageClient {
    http_client: Arc<dyn HttpClient>,
    config: FetchConfig,
}

impl AlphaVantageClient {
    pub fn new(config: FetchConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: FetchConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Build the GET request for `symbol` and `series`.
    pub fn request_for(&self, symbol: &Symbol, series: TimeSeriesKind) -> HttpRequest {
        let mut request = HttpRequest::get(&self.config.base_url)
            .with_timeout(self.config.timeout)
            .with_query("function", series.function())
            .with_query("symbol", symbol.as_str())
            .with_query("outputsize", "full")
            .with_query("datatype", "csv")
            .with_query("apikey", self.config.api_key.expose());

        if let Some(interval) = series.interval() {
            request = request.with_query("interval", interval.as_str());
        }

        request
    }

    /// Download and decode the full history of `symbol` at the granularity of
    /// `series`.
    pub async fn fetch(
        &self,
        symbol: &Symbol,
        series: TimeSeriesKind,
    ) -> Result<PriceSeries, FetchError> {
        let request = self.request_for(symbol, series);
        tracing::debug!(
            function = series.function(),
            symbol = symbol.as_str(),
            interval = series.interval().map(|interval| interval.as_str()),
            demo_key = self.config.api_key.is_demo(),
            "requesting alphavantage time series"
        );

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| FetchError::network(error.message()))?;

        if !response.is_success() {
            return Err(FetchError::network(format!(
                "alphavantage returned status {}",
                response.status
            )));
        }

        let decoded = parse_csv(symbol, series, &response.body)?;
        tracing::info!(
            symbol = symbol.as_str(),
            rows = decoded.len(),
            "decoded alphavantage time series"
        );
        Ok(decoded)
    }
}

/// JSON notice Alpha Vantage sends with status 200 in place of CSV when the
/// key, symbol or rate limit is rejected.
#[derive(Debug, Deserialize)]
struct AlphaVantageNotice {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

impl AlphaVantageNotice {
    fn into_message(self) -> Option<String> {
        self.error_message.or(self.note).or(self.information)
    }
}

/// Decode a CSV time series body.
///
/// Any missing column or unparsable field fails the whole batch.
pub fn parse_csv(
    symbol: &Symbol,
    series: TimeSeriesKind,
    body: &str,
) -> Result<PriceSeries, FetchError> {
    if body.trim_start().starts_with('{') {
        let message = serde_json::from_str::<AlphaVantageNotice>(body)
            .ok()
            .and_then(AlphaVantageNotice::into_message)
            .unwrap_or_else(|| String::from("received JSON instead of CSV"));
        return Err(FetchError::format(message));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FetchError::format(format!("unreadable header row: {e}")))?
        .clone();

    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|header| header == name) {
            Some(index) => *slot = index,
            None => missing.push(name),
        }
    }
    if !missing.is_empty() {
        return Err(FetchError::format(format!(
            "missing columns: {}",
            missing.join(", ")
        )));
    }
    let [timestamp, open, high, low, close, volume] = columns;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| FetchError::format(format!("malformed row {}: {e}", line + 1)))?;
        let field = |index: usize| record.get(index).unwrap_or_default();

        rows.push(PriceRow {
            timestamp: parse_timestamp(field(timestamp))?,
            open: parse_number("open", field(open))?,
            high: parse_number("high", field(high))?,
            low: parse_number("low", field(low))?,
            close: parse_number("close", field(close))?,
            volume: parse_number("volume", field(volume))?,
        });
    }

    Ok(PriceSeries::from_rows(symbol.clone(), series, rows))
}

/// Intraday rows carry `YYYY-MM-DD HH:MM:SS`; daily and coarser rows carry a
/// bare date, read as midnight.
fn parse_timestamp(value: &str) -> Result<PrimitiveDateTime, FetchError> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        Date::parse(value, format_description!("[year]-[month]-[day]"))
            .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
    })
    .map_err(|_| FetchError::format(format!("invalid timestamp '{value}'")))
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, FetchError> {
    value
        .parse::<f64>()
        .map_err(|_| FetchError::format(format!("invalid {field} value '{value}'")))
}
