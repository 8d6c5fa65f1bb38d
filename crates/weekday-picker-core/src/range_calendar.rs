use crate::calendar_date::CalendarDate;
use crate::weekend::is_weekend;

/// Returns every calendar day in the inclusive range [start, end], ascending.
///
/// Empty if `start > end` or if either endpoint is not a real date.
pub fn dates_in_range(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    let (Some(first), Some(last)) = (start.to_naive(), end.to_naive()) else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut current = first;
    while current <= last {
        dates.push(CalendarDate::from_naive(current));
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Returns all weekdays (Mon-Fri) in the inclusive date range [start, end].
pub fn weekdays_in_range(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    dates_in_range(start, end)
        .into_iter()
        .filter(|d| !is_weekend(d))
        .collect()
}

/// Every day of a month (zero-based), ascending.
pub fn month_dates(year: i32, month: u32) -> Vec<CalendarDate> {
    (1..=31)
        .map(|day| CalendarDate::new(year, month, day))
        .filter(CalendarDate::is_valid)
        .collect()
}
