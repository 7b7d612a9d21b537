use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Interval, ValidationError};

/// Chart geometry chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    /// Parse a menu selector: "1" is bar, "2" is line.
    pub fn from_selector(value: &str) -> Result<Self, ValidationError> {
        match value {
            "1" => Ok(Self::Bar),
            "2" => Ok(Self::Line),
            other => Err(ValidationError::InvalidChartType {
                value: other.to_owned(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling granularity requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSeriesKind {
    Intraday(Interval),
    Daily,
    Weekly,
    Monthly,
}

impl TimeSeriesKind {
    /// Parse a menu selector: "1" intraday, "2" daily, "3" weekly, "4" monthly.
    ///
    /// Intraday starts at the default interval; the caller picks a finer one
    /// with [`TimeSeriesKind::with_interval`].
    pub fn from_selector(value: &str) -> Result<Self, ValidationError> {
        match value {
            "1" => Ok(Self::Intraday(Interval::default())),
            "2" => Ok(Self::Daily),
            "3" => Ok(Self::Weekly),
            "4" => Ok(Self::Monthly),
            other => Err(ValidationError::InvalidTimeSeries {
                value: other.to_owned(),
            }),
        }
    }

    /// Replace the interval of an intraday series. Other kinds are unchanged.
    pub const fn with_interval(self, interval: Interval) -> Self {
        match self {
            Self::Intraday(_) => Self::Intraday(interval),
            other => other,
        }
    }

    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::Intraday(_))
    }

    pub const fn interval(self) -> Option<Interval> {
        match self {
            Self::Intraday(interval) => Some(interval),
            _ => None,
        }
    }

    /// Value of the `function` query parameter.
    pub const fn function(self) -> &'static str {
        match self {
            Self::Intraday(_) => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
        }
    }
}

impl Display for TimeSeriesKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intraday(interval) => write!(f, "Intraday ({interval})"),
            Self::Daily => f.write_str("Daily"),
            Self::Weekly => f.write_str("Weekly"),
            Self::Monthly => f.write_str("Monthly"),
        }
    }
}
