use tickchart_core::{
    run_query, AlphaVantageClient, ChartKind, ChartQuery, ChartRenderer, DateRange, Symbol,
    TimeSeriesKind,
};

use super::{render_line, summary_lines};
use crate::cli::{ChartArgs, SeriesSelector};
use crate::error::CliError;

pub async fn run(
    args: &ChartArgs,
    client: &AlphaVantageClient,
    renderer: &dyn ChartRenderer,
) -> Result<(), CliError> {
    let query = query_from_args(args)?;
    let report = run_query(client, renderer, &query).await?;

    for line in summary_lines(&query, report.fetched, report.displayed) {
        println!("{line}");
    }
    if let Some(line) = render_line(report.handle.as_ref()) {
        println!("{line}");
    }
    Ok(())
}

fn query_from_args(args: &ChartArgs) -> Result<ChartQuery, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let series = match args.series {
        SeriesSelector::Intraday => TimeSeriesKind::Intraday(args.interval.into()),
        SeriesSelector::Daily => TimeSeriesKind::Daily,
        SeriesSelector::Weekly => TimeSeriesKind::Weekly,
        SeriesSelector::Monthly => TimeSeriesKind::Monthly,
    };
    let range = DateRange::parse(&args.start, &args.end)?;

    Ok(ChartQuery::new(symbol, ChartKind::from(args.chart), series, range))
}
