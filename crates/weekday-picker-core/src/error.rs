use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month {0}: expected 0..=11")]
    InvalidMonth(u32),

    #[error("Invalid year window: {min} is after {max}")]
    InvalidYearWindow { min: i32, max: i32 },

    #[error("No predefined range labelled {0:?}")]
    UnknownPreset(String),
}
