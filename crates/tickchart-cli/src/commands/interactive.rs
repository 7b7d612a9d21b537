use std::io::{self, BufRead, Write};

use tickchart_core::{
    fetch_filtered, render_fetched, AlphaVantageClient, ChartQuery, ChartRenderer, CoreError,
    FetchError,
};

use super::{banner, render_line, summary_lines};
use crate::error::CliError;
use crate::prompt::InputFlow;

pub async fn run(
    client: &AlphaVantageClient,
    renderer: &dyn ChartRenderer,
) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut flow = InputFlow::new(stdin.lock(), io::stdout());
    run_session(&mut flow, client, renderer).await
}

/// Repeat collect-fetch-render cycles until the user declines another one.
///
/// A cycle that fails after input was collected reports the failure and
/// starts over at symbol entry without asking to continue. Closing the input
/// ends the session without an error.
pub async fn run_session<R: BufRead, W: Write>(
    flow: &mut InputFlow<R, W>,
    client: &AlphaVantageClient,
    renderer: &dyn ChartRenderer,
) -> Result<(), CliError> {
    loop {
        let query = match flow.collect() {
            Ok(query) => query,
            Err(CliError::InputClosed) => {
                tracing::debug!("input closed, ending session");
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        let fetched = match fetch_filtered(client, &query).await {
            Ok(fetched) => fetched,
            Err(error) => {
                report_failure(flow, &query, &error)?;
                continue;
            }
        };
        for line in summary_lines(&query, fetched.fetched, fetched.displayed()) {
            flow.say(&line)?;
        }

        flow.say("\nGenerating chart... Please wait.")?;
        match render_fetched(renderer, &query, &fetched) {
            Ok(handle) => {
                if let Some(line) = render_line(handle.as_ref()) {
                    flow.say(&line)?;
                }
            }
            Err(error) => {
                report_failure(flow, &query, &error)?;
                continue;
            }
        }

        match flow.ask_view_again() {
            Ok(true) => {}
            Ok(false) | Err(CliError::InputClosed) => break,
            Err(error) => return Err(error),
        }
    }

    flow.say("Hope you enjoyed!")?;
    Ok(())
}

fn report_failure<R: BufRead, W: Write>(
    flow: &mut InputFlow<R, W>,
    query: &ChartQuery,
    error: &CoreError,
) -> Result<(), CliError> {
    tracing::warn!(%error, symbol = query.symbol.as_str(), "cycle failed");
    flow.say(&banner(failure_message(error)))
}

fn failure_message(error: &CoreError) -> &'static str {
    match error {
        CoreError::Fetch(FetchError::Network { .. }) => "API Request failed.",
        CoreError::Fetch(FetchError::Format { .. }) => "Unexpected data format from API.",
        CoreError::EmptyResult { .. } => {
            "No data fetched. Please try a different symbol or date range."
        }
        CoreError::Render(_) => "Failed to display the chart.",
        CoreError::Validation(_) => "Invalid selection.",
    }
}
