use serde::{Deserialize, Serialize};

use crate::calendar_date::CalendarDate;
use crate::error::PickerError;
use crate::resolver::RangeOrder;
use crate::selection::{SelectionState, Transition};

/// A labelled shortcut range supplied by the host, e.g. "This week".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedRange {
    pub label: String,
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl PredefinedRange {
    pub fn new(label: impl Into<String>, start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Complete the selection with this range. The endpoints are not checked
    /// against the weekday rule.
    pub fn apply(&self, order: RangeOrder) -> Transition {
        SelectionState::complete(self.start, self.end, order)
    }
}

/// Look up a range by its label.
pub fn find_by_label<'a>(
    ranges: &'a [PredefinedRange],
    label: &str,
) -> Result<&'a PredefinedRange, PickerError> {
    ranges
        .iter()
        .find(|r| r.label == label)
        .ok_or_else(|| PickerError::UnknownPreset(label.to_string()))
}
