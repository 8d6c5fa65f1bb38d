pub mod calendar_date;
pub mod config;
pub mod error;
pub mod navigation;
pub mod picker;
pub mod predefined;
pub mod range_calendar;
pub mod resolver;
pub mod selection;
pub mod weekend;

pub use calendar_date::CalendarDate;
pub use config::PickerConfig;
pub use error::PickerError;
pub use navigation::{DisplayCursor, Navigation, YearWindow};
pub use picker::{RangeConsumer, WeekdayRangePicker};
pub use predefined::PredefinedRange;
pub use resolver::{DateRangeResult, RangeOrder};
pub use selection::{SelectionState, Transition};
