use tracing::{debug, info};

use crate::calendar_date::CalendarDate;
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::navigation::{DisplayCursor, Navigation};
use crate::predefined::{PredefinedRange, find_by_label};
use crate::resolver::{DateRangeResult, RangeOrder};
use crate::selection::{SelectionState, Transition};

/// Receives each finalized range, exactly once per completed selection.
pub trait RangeConsumer {
    fn on_range(&mut self, result: &DateRangeResult);
}

impl<F> RangeConsumer for F
where
    F: FnMut(&DateRangeResult),
{
    fn on_range(&mut self, result: &DateRangeResult) {
        self(result)
    }
}

/// One interactive picker session: owns the selection, the displayed month and
/// the consumer that finalized ranges are delivered to.
///
/// Every operation completes, including delivery to the consumer, before it
/// returns.
pub struct WeekdayRangePicker<C> {
    selection: SelectionState,
    navigation: Navigation,
    order: RangeOrder,
    presets: Vec<PredefinedRange>,
    consumer: C,
}

impl<C: RangeConsumer> WeekdayRangePicker<C> {
    pub fn new(config: PickerConfig, initial: DisplayCursor, consumer: C) -> Self {
        Self {
            selection: SelectionState::Empty,
            navigation: Navigation::new(initial, config.year_window),
            order: config.range_order,
            presets: config.presets,
            consumer,
        }
    }

    pub fn click_date(&mut self, date: CalendarDate) {
        let transition = self.selection.click(date, self.order);
        self.commit(transition);
    }

    pub fn next_month(&mut self) {
        self.navigation.next_month();
    }

    pub fn prev_month(&mut self) {
        self.navigation.prev_month();
    }

    pub fn set_year(&mut self, year: i32) {
        self.navigation.set_year(year);
    }

    /// Complete the selection with an externally supplied range.
    pub fn apply_predefined(&mut self, range: &PredefinedRange) {
        debug!(label = %range.label, "applying predefined range");
        let transition = range.apply(self.order);
        self.commit(transition);
    }

    /// Apply one of the configured ranges by label.
    pub fn apply_predefined_label(&mut self, label: &str) -> Result<(), PickerError> {
        let transition = find_by_label(&self.presets, label)?.apply(self.order);
        debug!(label, "applying predefined range");
        self.commit(transition);
        Ok(())
    }

    pub fn cancel_selection(&mut self) {
        debug!("selection cancelled");
        self.selection = self.selection.cancel();
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn cursor(&self) -> DisplayCursor {
        self.navigation.cursor()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn presets(&self) -> &[PredefinedRange] {
        &self.presets
    }

    pub fn range_order(&self) -> RangeOrder {
        self.order
    }

    /// True for weekdays inside the current complete selection.
    pub fn is_highlighted(&self, date: &CalendarDate) -> bool {
        self.selection.is_highlighted(date, self.order)
    }

    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    pub fn into_consumer(self) -> C {
        self.consumer
    }

    fn commit(&mut self, transition: Transition) {
        self.selection = transition.state;
        if let Some(result) = transition.emission {
            info!(
                start = %result.range.0,
                end = %result.range.1,
                weekends = result.weekends.len(),
                "range selected"
            );
            self.consumer.on_range(&result);
        }
    }
}
