//! CLI argument definitions for tickchart.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--api-key` | `$ALPHAVANTAGE_API_KEY`, else `demo` | Alpha Vantage key |
//! | `--base-url` | Alpha Vantage query endpoint | API endpoint |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `--output-dir` | system temp dir | Where chart pages are written |
//! | `--no-browser` | `false` | Write the chart without opening it |
//! | `--log-level` | `warn` | Default log filter, `RUST_LOG` overrides |
//!
//! # Examples
//!
//! ```bash
//! # Guided prompts
//! tickchart
//!
//! # One chart, no prompts
//! tickchart chart --symbol IBM --chart line --series daily --start 2024-01-01 --end 2024-03-01
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tickchart_core::{ChartKind, Interval, API_KEY_ENV, DEFAULT_BASE_URL};

/// Stock Data Visualizer
///
/// Fetch historical prices from Alpha Vantage and chart them in the browser.
#[derive(Debug, Parser)]
#[command(name = "tickchart", author, version, about = "Stock price charts from Alpha Vantage")]
pub struct Cli {
    /// Alpha Vantage API key. Falls back to the public demo key.
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Alpha Vantage query endpoint.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Directory for generated chart pages.
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Write the chart page but do not open a browser.
    #[arg(long, global = true, default_value_t = false)]
    pub no_browser: bool,

    /// Default log filter (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for symbol, chart type, series and dates, repeatedly (default).
    Interactive,

    /// Draw a single chart from command-line arguments.
    ///
    /// # Examples
    ///
    ///   tickchart chart --symbol IBM --chart bar --series weekly --start 2020-01-01 --end 2024-01-01
    ///   tickchart chart --symbol MSFT --chart line --series intraday --interval 5min --start 2024-05-01 --end 2024-05-03
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Ticker symbol, 1-7 uppercase letters.
    #[arg(long)]
    pub symbol: String,

    #[arg(long, value_enum, default_value_t = ChartSelector::Line)]
    pub chart: ChartSelector,

    #[arg(long, value_enum, default_value_t = SeriesSelector::Daily)]
    pub series: SeriesSelector,

    /// Sampling interval, intraday only.
    #[arg(long, value_enum, default_value_t = IntervalSelector::SixtyMin)]
    pub interval: IntervalSelector,

    /// First day to display, YYYY-MM-DD.
    #[arg(long)]
    pub start: String,

    /// Last day to display, YYYY-MM-DD.
    #[arg(long)]
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartSelector {
    Bar,
    Line,
}

impl From<ChartSelector> for ChartKind {
    fn from(value: ChartSelector) -> Self {
        match value {
            ChartSelector::Bar => Self::Bar,
            ChartSelector::Line => Self::Line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesSelector {
    Intraday,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntervalSelector {
    #[value(name = "1min")]
    OneMin,
    #[value(name = "5min")]
    FiveMin,
    #[value(name = "15min")]
    FifteenMin,
    #[value(name = "30min")]
    ThirtyMin,
    #[value(name = "60min")]
    SixtyMin,
}

impl From<IntervalSelector> for Interval {
    fn from(value: IntervalSelector) -> Self {
        match value {
            IntervalSelector::OneMin => Self::OneMinute,
            IntervalSelector::FiveMin => Self::FiveMinutes,
            IntervalSelector::FifteenMin => Self::FifteenMinutes,
            IntervalSelector::ThirtyMin => Self::ThirtyMinutes,
            IntervalSelector::SixtyMin => Self::SixtyMinutes,
        }
    }
}
