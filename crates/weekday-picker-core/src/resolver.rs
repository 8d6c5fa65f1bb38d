use serde::{Deserialize, Serialize};

use crate::calendar_date::CalendarDate;
use crate::range_calendar::dates_in_range;
use crate::weekend::is_weekend;

/// How a range whose end precedes its start is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOrder {
    /// Swap the endpoints so the emitted range is always ascending.
    #[default]
    Normalize,
    /// Emit the endpoints as given. A reversed range contains no dates.
    Preserve,
}

impl RangeOrder {
    pub fn apply(self, start: CalendarDate, end: CalendarDate) -> (CalendarDate, CalendarDate) {
        match self {
            RangeOrder::Normalize if start > end => (end, start),
            _ => (start, end),
        }
    }
}

/// A finalized selection as delivered to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeResult {
    /// `(start, end)` as `YYYY-MM-DD`.
    pub range: (String, String),
    /// Saturdays and Sundays inside the range, ascending, as `YYYY-MM-DD`.
    pub weekends: Vec<String>,
}

/// ISO strings of the weekend days in [start, end].
pub fn weekends_in_range(start: CalendarDate, end: CalendarDate) -> Vec<String> {
    dates_in_range(start, end)
        .iter()
        .filter(|d| is_weekend(d))
        .map(CalendarDate::iso_string)
        .collect()
}

pub fn resolve(start: CalendarDate, end: CalendarDate, order: RangeOrder) -> DateRangeResult {
    let (start, end) = order.apply(start, end);
    DateRangeResult {
        range: (start.iso_string(), end.iso_string()),
        weekends: weekends_in_range(start, end),
    }
}
