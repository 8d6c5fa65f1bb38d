use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar_date::CalendarDate;
use crate::error::PickerError;
use crate::range_calendar::month_dates;

const DEFAULT_MIN_YEAR: i32 = 2020;
const DEFAULT_MAX_YEAR: i32 = 2030;

/// The month currently shown to the user. Month is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCursor")]
pub struct DisplayCursor {
    month: u32,
    year: i32,
}

#[derive(Deserialize)]
struct RawCursor {
    month: u32,
    year: i32,
}

impl TryFrom<RawCursor> for DisplayCursor {
    type Error = PickerError;

    fn try_from(raw: RawCursor) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month).ok_or(PickerError::InvalidMonth(raw.month))
    }
}

impl DisplayCursor {
    /// Returns `None` if `month` is not in 0..=11.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { month, year })
    }

    /// The cursor showing the month that contains `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            month: date.month().min(11),
            year: date.year(),
        }
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// December wraps to January of the following year.
    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                month: 0,
                year: self.year.saturating_add(1),
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    /// January wraps to December of the previous year.
    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                month: 11,
                year: self.year.saturating_sub(1),
            }
        } else {
            Self {
                month: self.month - 1,
                ..self
            }
        }
    }

    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// True if `date` lies in the displayed month.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.is_valid() && date.year() == self.year && date.month() == self.month
    }

    /// Every day of the displayed month, ascending.
    pub fn dates(&self) -> Vec<CalendarDate> {
        month_dates(self.year, self.month)
    }
}

/// Inclusive span of years offered to the user for direct year selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub min: i32,
    pub max: i32,
}

impl YearWindow {
    pub fn new(min: i32, max: i32) -> Result<Self, PickerError> {
        let window = Self { min, max };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if self.min > self.max {
            return Err(PickerError::InvalidYearWindow {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}

/// Month/year navigation. Never touches the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    cursor: DisplayCursor,
    window: YearWindow,
}

impl Navigation {
    pub fn new(cursor: DisplayCursor, window: YearWindow) -> Self {
        Self { cursor, window }
    }

    pub fn cursor(&self) -> DisplayCursor {
        self.cursor
    }

    pub fn window(&self) -> YearWindow {
        self.window
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
        debug!(month = self.cursor.month, year = self.cursor.year, "next month");
    }

    pub fn prev_month(&mut self) {
        self.cursor = self.cursor.prev();
        debug!(month = self.cursor.month, year = self.cursor.year, "previous month");
    }

    /// Replaces the displayed year. Years outside the window are accepted; the
    /// window only bounds what is offered for selection.
    pub fn set_year(&mut self, year: i32) {
        if !self.window.contains(year) {
            debug!(year, min = self.window.min, max = self.window.max, "year outside window");
        }
        self.cursor = self.cursor.with_year(year);
    }

    /// Every day of the displayed month; the dates that may be clicked.
    pub fn visible_dates(&self) -> Vec<CalendarDate> {
        self.cursor.dates()
    }
}
