//! Wall-clock time of day without a date component.
//!
//! Work-window boundaries, the minimum free duration and the transit buffer are
//! all entered as `HH:MM` values. Only the hour and minute are meaningful, so
//! they get their own type instead of a full datetime whose date could be
//! relied on by accident.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// An hour/minute pair, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Build a time of day, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(FinderError::InvalidTimeOfDay(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(TimeOfDay {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Keep only the hour and minute of a wall-clock value (seconds are dropped).
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        TimeOfDay {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Reinterpret the value as a duration: `hours(hour) + minutes(minute)`.
    pub fn as_duration(&self) -> Duration {
        Duration::hours(self.hour as i64) + Duration::minutes(self.minute as i64)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // Both fields are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        TimeOfDay::from_timelike(&t)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = FinderError;

    /// Parse `H:MM` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FinderError::InvalidTimeOfDay(format!("'{}'", s));

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;

        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = FinderError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
