use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Sampling interval for intraday series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[default]
    #[serde(rename = "60min")]
    SixtyMinutes,
}

impl Interval {
    pub const ALL: [Self; 5] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
    ];

    /// Parse a menu selector: "1" through "5", in [`Interval::ALL`] order.
    pub fn from_selector(value: &str) -> Result<Self, ValidationError> {
        match value {
            "1" => Ok(Self::OneMinute),
            "2" => Ok(Self::FiveMinutes),
            "3" => Ok(Self::FifteenMinutes),
            "4" => Ok(Self::ThirtyMinutes),
            "5" => Ok(Self::SixtyMinutes),
            other => Err(ValidationError::InvalidInterval {
                value: other.to_owned(),
            }),
        }
    }

    /// Value of the `interval` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::SixtyMinutes => "60min",
        }
    }

    pub const fn minutes(self) -> u32 {
        match self {
            Self::OneMinute => 1,
            Self::FiveMinutes => 5,
            Self::FifteenMinutes => 15,
            Self::ThirtyMinutes => 30,
            Self::SixtyMinutes => 60,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
