use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// A calendar day identified by year, zero-based month (0 = January) and day of month.
///
/// The fields are stored exactly as given, so a value can name a day that does not
/// exist (e.g. April 31). Such a date is invalid: it never enumerates, is never a
/// weekend and can never be selected.
///
/// Ordering and equality compare `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date from raw fields. No validation is performed.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0(), date.day())
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month, 0 = January.
    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The chrono date for these fields, or `None` if the day does not exist.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, self.day)
    }

    pub fn is_valid(&self) -> bool {
        self.to_naive().is_some()
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.to_naive().map(|d| d.weekday())
    }

    /// The following calendar day.
    pub fn succ(&self) -> Option<Self> {
        self.to_naive()?.succ_opt().map(Self::from_naive)
    }

    /// Number of days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(&self, other: &Self) -> Option<i64> {
        Some((other.to_naive()? - self.to_naive()?).num_days())
    }

    /// `YYYY-MM-DD`, formatted from the stored fields. Years past 9999 or before 0
    /// are written with a sign (`+10000-01-03`).
    pub fn iso_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Years outside 0..=9999 carry a sign, as chrono's `%Y` expects.
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}", self.year)?;
        } else {
            write!(f, "{:+05}", self.year)?;
        }
        write!(f, "-{:02}-{:02}", self.month.saturating_add(1), self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from_naive)
            .map_err(|e| PickerError::InvalidDate(format!("{s}: {e}")))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = PickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
