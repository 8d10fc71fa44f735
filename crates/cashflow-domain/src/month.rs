//! Calendar month value type with a canonical `YYYY-MM` text form.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::MonthParseError;

/// A calendar month, ordered chronologically.
///
/// Serialises as the zero-padded `YYYY-MM` string, so the textual and the
/// chronological orderings agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month(NaiveDate);

impl Month {
    /// Builds a month from its year (0..=9999) and month number (1..=12).
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        if !(0..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Returns the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value.trim();
        let (year, month) = raw
            .split_once('-')
            .ok_or_else(|| MonthParseError::new(value))?;
        if year.len() != 4 || !is_digits(year) {
            return Err(MonthParseError::new(value));
        }
        if month.is_empty() || month.len() > 2 || !is_digits(month) {
            return Err(MonthParseError::new(value));
        }
        let year: i32 = year.parse().map_err(|_| MonthParseError::new(value))?;
        let month: u32 = month.parse().map_err(|_| MonthParseError::new(value))?;
        Month::from_ym(year, month).ok_or_else(|| MonthParseError::new(value))
    }
}

impl TryFrom<String> for Month {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}

fn is_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}
