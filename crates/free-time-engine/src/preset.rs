//! Named search ranges resolved against a caller-supplied "today".
//!
//! Nothing here reads the system clock; the caller decides what today is.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::params::SearchWindow;

/// Which day begins a week for "this week" / "next week".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// ISO 8601 (Monday is the first day).
    #[default]
    Monday,
    /// US/Canada convention.
    Sunday,
}

impl WeekStartDay {
    fn days_into_week(self, weekday: Weekday) -> i64 {
        match self {
            WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
            WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
        }
    }
}

impl FromStr for WeekStartDay {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStartDay::Monday),
            "sunday" | "sun" => Ok(WeekStartDay::Sunday),
            other => Err(FinderError::InvalidPreset(format!(
                "unknown week start '{}' (expected monday or sunday)",
                other
            ))),
        }
    }
}

/// A search range as the user picks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPreset {
    Today,
    Tomorrow,
    /// From today through the last day of the current week.
    ThisWeek,
    /// The whole following week.
    NextWeek,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl SearchPreset {
    /// Resolve to a concrete day range.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidRange` for a custom range whose start is
    /// after its end.
    pub fn resolve(&self, today: NaiveDate, week_start: WeekStartDay) -> Result<SearchWindow> {
        let days_into_week = week_start.days_into_week(today.weekday());
        let week_begin = today - Duration::days(days_into_week);

        match *self {
            SearchPreset::Today => Ok(SearchWindow::single_day(today)),
            SearchPreset::Tomorrow => Ok(SearchWindow::single_day(today + Duration::days(1))),
            SearchPreset::ThisWeek => SearchWindow::new(today, week_begin + Duration::days(6)),
            SearchPreset::NextWeek => SearchWindow::new(
                week_begin + Duration::days(7),
                week_begin + Duration::days(13),
            ),
            SearchPreset::Custom { from, to } => SearchWindow::new(from, to),
        }
    }
}

impl FromStr for SearchPreset {
    type Err = FinderError;

    /// Parse a named preset. Custom ranges are built directly, not parsed.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(SearchPreset::Today),
            "tomorrow" => Ok(SearchPreset::Tomorrow),
            "this-week" | "this_week" => Ok(SearchPreset::ThisWeek),
            "next-week" | "next_week" => Ok(SearchPreset::NextWeek),
            other => Err(FinderError::InvalidPreset(format!(
                "unknown preset '{}' (expected today, tomorrow, this-week or next-week)",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPreset::Today => f.write_str("today"),
            SearchPreset::Tomorrow => f.write_str("tomorrow"),
            SearchPreset::ThisWeek => f.write_str("this-week"),
            SearchPreset::NextWeek => f.write_str("next-week"),
            SearchPreset::Custom { from, to } => write!(f, "{}..{}", from, to),
        }
    }
}
