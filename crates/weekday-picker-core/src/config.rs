use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::navigation::YearWindow;
use crate::predefined::PredefinedRange;
use crate::resolver::RangeOrder;

/// Construction-time settings for a picker session.
///
/// JSON layout (every field optional):
///
/// ```json
/// {
///   "year_window": { "min": 2020, "max": 2030 },
///   "range_order": "normalize",
///   "presets": [{ "label": "Week 10", "start": "2024-03-04", "end": "2024-03-08" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub year_window: YearWindow,
    pub range_order: RangeOrder,
    pub presets: Vec<PredefinedRange>,
}

impl PickerConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, PickerError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        self.year_window.validate()
    }
}
