mod chart;
mod interactive;

use std::sync::Arc;
use std::time::Duration;

use tickchart_core::{
    AlphaVantageClient, ApiKey, ChartQuery, FetchConfig, HtmlChartRenderer, RenderHandle,
    ReqwestHttpClient,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let client = build_client(cli);
    let renderer = build_renderer(cli);

    match &cli.command {
        None | Some(Command::Interactive) => interactive::run(&client, &renderer).await,
        Some(Command::Chart(args)) => chart::run(args, &client, &renderer).await,
    }
}

fn build_client(cli: &Cli) -> AlphaVantageClient {
    let config = FetchConfig::new(ApiKey::or_demo(cli.api_key.clone()))
        .with_base_url(cli.base_url.clone())
        .with_timeout(Duration::from_millis(cli.timeout_ms));
    tracing::debug!(?config, "fetch configuration");

    AlphaVantageClient::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
}

fn build_renderer(cli: &Cli) -> HtmlChartRenderer {
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    HtmlChartRenderer::new(output_dir, !cli.no_browser)
}

/// Lines printed once rows are fetched and filtered, before rendering.
pub fn summary_lines(query: &ChartQuery, fetched: usize, displayed: usize) -> Vec<String> {
    vec![
        format!("\nFetched {fetched} records for {}.", query.symbol),
        format!(
            "Displaying data from {} to {}: {displayed} records.",
            query.range.start(),
            query.range.end(),
        ),
        format!("Will use {} chart\n", query.chart),
    ]
}

/// Line describing what rendering produced, if anything is worth saying.
pub fn render_line(handle: Option<&RenderHandle>) -> Option<String> {
    match handle {
        Some(handle) => handle
            .path
            .as_ref()
            .map(|path| format!("Chart saved to {}", path.display())),
        None => Some(banner("No data available to display.")),
    }
}

pub fn banner(message: &str) -> String {
    format!("\n***********************\n{message}\n***********************\n")
}
