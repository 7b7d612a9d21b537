//! Guided input collection.
//!
//! Each step of the conversation is an [`InputState`]. A step that fails
//! validation prints a hint and returns itself; a step that succeeds returns
//! the next state with the value it collected.
//!
//! ```text
//! SymbolEntry -> ChartTypeEntry -> SeriesEntry -+-> DateRangeEntry -> Done
//!                                               |        ^
//!                                               +-> IntervalEntry (intraday)
//! ```

use std::io::{BufRead, Write};

use tickchart_core::{
    check_min_date, parse_date, ChartKind, ChartQuery, DateRange, Interval, Symbol,
    TimeSeriesKind, ValidationError, MIN_DATE,
};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputState {
    SymbolEntry,
    ChartTypeEntry {
        symbol: Symbol,
    },
    SeriesEntry {
        symbol: Symbol,
        chart: ChartKind,
    },
    IntervalEntry {
        symbol: Symbol,
        chart: ChartKind,
    },
    DateRangeEntry {
        symbol: Symbol,
        chart: ChartKind,
        series: TimeSeriesKind,
    },
    Done(ChartQuery),
}

/// Prompts on `output`, reads answers line by line from `input`.
pub struct InputFlow<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputFlow<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Walk the states until a complete query is collected.
    pub fn collect(&mut self) -> Result<ChartQuery, CliError> {
        writeln!(self.output, "Stock Data Visualizer\n-------------------------")?;

        let mut state = InputState::SymbolEntry;
        loop {
            state = match self.step(state)? {
                InputState::Done(query) => return Ok(query),
                next => next,
            };
        }
    }

    /// Run one state and return the state to enter next.
    pub fn step(&mut self, state: InputState) -> Result<InputState, CliError> {
        let next = match state {
            InputState::SymbolEntry => {
                let answer = self.ask("\nEnter the stock symbol you are looking for: ")?;
                match Symbol::parse(&answer) {
                    Ok(symbol) => InputState::ChartTypeEntry { symbol },
                    Err(error) => {
                        tracing::debug!(%error, "rejected symbol");
                        self.say("Invalid symbol. Must be 1-7 uppercase letters.")?;
                        InputState::SymbolEntry
                    }
                }
            }

            InputState::ChartTypeEntry { symbol } => {
                self.say("\nChart Types\n---------------------\n1. Bar\n2. Line\n")?;
                let answer = self.ask("Enter the chart type you want (1, 2): ")?;
                match ChartKind::from_selector(&answer) {
                    Ok(chart) => InputState::SeriesEntry { symbol, chart },
                    Err(_) => {
                        self.say("Enter a 1 or 2 for chart type")?;
                        InputState::ChartTypeEntry { symbol }
                    }
                }
            }

            InputState::SeriesEntry { symbol, chart } => {
                self.say(
                    "\nSelect the Time Series of the chart you want to generate\n\
                     -------------------------------------\n\
                     1. Intraday\n2. Daily\n3. Weekly\n4. Monthly",
                )?;
                let answer = self.ask("\nEnter time series option (1, 2, 3, 4): ")?;
                match TimeSeriesKind::from_selector(&answer) {
                    Ok(series) if series.is_intraday() => {
                        InputState::IntervalEntry { symbol, chart }
                    }
                    Ok(series) => InputState::DateRangeEntry {
                        symbol,
                        chart,
                        series,
                    },
                    Err(_) => {
                        self.say("Please enter 1, 2, 3, or 4 for time series option.")?;
                        InputState::SeriesEntry { symbol, chart }
                    }
                }
            }

            InputState::IntervalEntry { symbol, chart } => {
                self.say(
                    "\nSelect the time interval for the chart\n\
                     -------------------------------------\n\
                     1. 1 minute\n2. 5 minutes\n3. 15 minutes\n4. 30 minutes\n5. 60 minutes",
                )?;
                let answer = self.ask("Enter interval option (1, 2, 3, 4, 5): ")?;
                match Interval::from_selector(&answer) {
                    Ok(interval) => InputState::DateRangeEntry {
                        symbol,
                        chart,
                        series: TimeSeriesKind::Intraday(interval),
                    },
                    Err(_) => {
                        self.say("Please enter 1, 2, 3, 4, or 5 for interval option.")?;
                        InputState::IntervalEntry { symbol, chart }
                    }
                }
            }

            InputState::DateRangeEntry {
                symbol,
                chart,
                series,
            } => match self.ask_date_range()? {
                Some(range) => InputState::Done(ChartQuery::new(symbol, chart, series, range)),
                None => InputState::DateRangeEntry {
                    symbol,
                    chart,
                    series,
                },
            },

            done @ InputState::Done(_) => done,
        };

        Ok(next)
    }

    /// `Ok(None)` means the user has been told what was wrong and the whole
    /// range should be asked for again, starting with the start date.
    fn ask_date_range(&mut self) -> Result<Option<DateRange>, CliError> {
        let answer = self.ask("\nEnter the start date (YYYY-MM-DD): ")?;
        let Ok(start) = parse_date(&answer) else {
            self.say("Invalid Start Date format. Please use YYYY-MM-DD.")?;
            return Ok(None);
        };
        if check_min_date(start).is_err() {
            self.say(&format!("Start date must be on or after {MIN_DATE}."))?;
            return Ok(None);
        }

        let answer = self.ask("\nEnter the end date (YYYY-MM-DD): ")?;
        let Ok(end) = parse_date(&answer) else {
            self.say("Invalid End Date format. Please use YYYY-MM-DD.")?;
            return Ok(None);
        };

        match DateRange::new(start, end) {
            Ok(range) => Ok(Some(range)),
            Err(ValidationError::StartNotBeforeEnd { .. }) => {
                self.say("Start date must be earlier than end date.")?;
                Ok(None)
            }
            Err(error) => {
                self.say(&error.to_string())?;
                Ok(None)
            }
        }
    }

    /// Ask whether to run another cycle. Only `y` (any case) continues.
    pub fn ask_view_again(&mut self) -> Result<bool, CliError> {
        let answer =
            self.ask("Would you like to view more stock data? Press 'y' to continue: ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    pub fn say(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line ending.
    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
