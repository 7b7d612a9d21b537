use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::macros::{date, format_description};
use time::Date;

use crate::ValidationError;

/// Earliest date a range may start at.
pub const MIN_DATE: Date = date!(2000 - 01 - 01);

/// Parse an exact `YYYY-MM-DD` calendar date.
///
/// The shape is checked byte by byte before the calendar check so that
/// variants `time` would otherwise tolerate (signs, short fields) are refused.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        value: input.to_owned(),
    };

    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(invalid());
    }

    let shape_ok = bytes.iter().enumerate().all(|(index, byte)| match index {
        4 | 7 => *byte == b'-',
        _ => byte.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(invalid());
    }

    let date =
        Date::parse(input, format_description!("[year]-[month]-[day]")).map_err(|_| invalid())?;
    // Year zero is not a calendar year.
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

/// Inclusive calendar range with `MIN_DATE <= start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: Date,
    end: Date,
}

/// Unchecked wire shape, validated through [`DateRange::new`].
#[derive(Deserialize)]
struct RawDateRange {
    start: Date,
    end: Date,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ValidationError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, ValidationError> {
        check_min_date(start)?;

        // `end > start >= MIN_DATE` covers the lower bound for `end`.
        if start >= end {
            return Err(ValidationError::StartNotBeforeEnd { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Reject dates earlier than [`MIN_DATE`].
pub fn check_min_date(date: Date) -> Result<(), ValidationError> {
    if date < MIN_DATE {
        return Err(ValidationError::DateTooEarly {
            date,
            min: MIN_DATE,
        });
    }
    Ok(())
}
