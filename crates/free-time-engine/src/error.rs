//! Error types for free-time-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::time_of_day::TimeOfDay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Invalid work window: {end} is not after {start}")]
    InvalidWorkWindow { start: TimeOfDay, end: TimeOfDay },

    #[error(
        "Work window too short: {required_minutes} min needed for the minimum free time plus transit, {available_minutes} min available"
    )]
    WorkWindowTooShort {
        required_minutes: i64,
        available_minutes: i64,
    },

    #[error("Invalid preset: {0}")]
    InvalidPreset(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
