use tracing::debug;

use crate::calendar_date::CalendarDate;
use crate::resolver::{DateRangeResult, RangeOrder, resolve};
use crate::weekend::{is_selectable, is_weekend};

/// Progress of a two-click range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Empty,
    StartOnly {
        start: CalendarDate,
    },
    Complete {
        start: CalendarDate,
        end: CalendarDate,
    },
}

/// Result of feeding an interaction to a [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    /// Present only when the transition completed a range.
    pub emission: Option<DateRangeResult>,
}

impl Transition {
    fn quiet(state: SelectionState) -> Self {
        Self {
            state,
            emission: None,
        }
    }
}

impl SelectionState {
    /// Apply a click on `date`.
    ///
    /// Weekend and non-existent dates are ignored. The first weekday click (or any
    /// click after a complete pair) starts a new selection; the second completes it
    /// and produces the emission.
    pub fn click(self, date: CalendarDate, order: RangeOrder) -> Transition {
        if !is_selectable(&date) {
            debug!(%date, "ignoring click on unselectable date");
            return Transition::quiet(self);
        }

        match self {
            SelectionState::Empty | SelectionState::Complete { .. } => {
                debug!(%date, "selection started");
                Transition::quiet(SelectionState::StartOnly { start: date })
            }
            SelectionState::StartOnly { start } => Self::complete(start, date, order),
        }
    }

    /// Jump straight to a complete selection without checking the endpoints.
    pub fn complete(start: CalendarDate, end: CalendarDate, order: RangeOrder) -> Transition {
        let result = resolve(start, end, order);
        debug!(%start, %end, weekends = result.weekends.len(), "selection complete");
        Transition {
            state: SelectionState::Complete { start, end },
            emission: Some(result),
        }
    }

    pub fn cancel(self) -> Self {
        SelectionState::Empty
    }

    pub fn start(&self) -> Option<CalendarDate> {
        match self {
            SelectionState::Empty => None,
            SelectionState::StartOnly { start } | SelectionState::Complete { start, .. } => {
                Some(*start)
            }
        }
    }

    pub fn end(&self) -> Option<CalendarDate> {
        match self {
            SelectionState::Complete { end, .. } => Some(*end),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionState::Complete { .. })
    }

    /// True if the selection is complete and `date` lies within it.
    pub fn contains(&self, date: &CalendarDate, order: RangeOrder) -> bool {
        let SelectionState::Complete { start, end } = *self else {
            return false;
        };
        let (lo, hi) = order.apply(start, end);
        date.is_valid() && lo <= *date && *date <= hi
    }

    /// True for weekdays inside a complete selection.
    pub fn is_highlighted(&self, date: &CalendarDate, order: RangeOrder) -> bool {
        self.contains(date, order) && !is_weekend(date)
    }
}
