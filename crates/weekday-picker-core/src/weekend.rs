use chrono::Weekday;

use crate::calendar_date::CalendarDate;

/// Returns true if the date is a Saturday or Sunday.
/// Invalid dates are never weekends.
pub fn is_weekend(date: &CalendarDate) -> bool {
    matches!(date.weekday(), Some(Weekday::Sat | Weekday::Sun))
}

/// Returns true if the date exists and falls on Monday through Friday.
pub fn is_selectable(date: &CalendarDate) -> bool {
    date.is_valid() && !is_weekend(date)
}
