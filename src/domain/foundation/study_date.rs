//! Study date value object: a calendar day pinned to UTC midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::DafError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const PATH_FORMAT: &str = "%Y/%m/%d";

/// A calendar day, always represented as 00:00:00 UTC.
///
/// Two dates built from the same `YYYY-MM-DD` string are equal regardless of
/// the local timezone of the caller, so day arithmetic never picks up DST or
/// offset drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudyDate(DateTime<Utc>);

impl StudyDate {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DafError::InvalidDateFormat` when the string is not a real
    /// calendar date in that form. Month and day must be two digits and the
    /// year exactly four; chrono alone would accept `2021-12-6` or `+2021-12-16`.
    pub fn parse(input: &str) -> Result<Self, DafError> {
        let trimmed = input.trim();
        if !has_date_shape(trimmed) {
            return Err(DafError::invalid_date(input));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::from_naive)
            .map_err(|_| DafError::invalid_date(input))
    }

    /// Creates a study date from a naive calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Returns today's date in the local calendar, pinned to UTC midnight.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Returns the inner UTC instant.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Whole days from `earlier` to this date.
    ///
    /// Negative when `earlier` is actually later.
    pub fn days_since(&self, earlier: &StudyDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Creates a new date by adding the specified number of days.
    ///
    /// Negative values subtract days. Returns `None` when the result falls
    /// outside the representable date range.
    pub fn plus_days(&self, days: i64) -> Option<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Formats the date as `YYYY/MM/DD` for use in URL paths.
    pub fn path_segment(&self) -> String {
        self.0.format(PATH_FORMAT).to_string()
    }
}

/// `NNNN-NN-NN` with ASCII digits.
fn has_date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for StudyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for StudyDate {
    type Err = DafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StudyDate {
    type Error = DafError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StudyDate> for String {
    fn from(date: StudyDate) -> Self {
        date.to_string()
    }
}
