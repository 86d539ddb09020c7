//! Busy calendar events as supplied by the event source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One calendar occurrence that blocks time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "all_day", default)]
    pub is_all_day: bool,
    #[serde(rename = "holiday", default)]
    pub is_holiday: bool,
    /// Display label; never consulted by the search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl BusyEvent {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        BusyEvent {
            start,
            end,
            is_all_day: false,
            is_holiday: false,
            title: None,
        }
    }

    pub fn all_day(mut self) -> Self {
        self.is_all_day = true;
        self
    }

    pub fn holiday(mut self) -> Self {
        self.is_holiday = true;
        self
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether `[start, end)` overlaps `[window_start, window_end)`.
    ///
    /// An event ending exactly at the window start (or starting exactly at its
    /// end) does not overlap. Neither does a zero-length event, which covers
    /// no time at all.
    pub fn overlaps(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> bool {
        self.start < self.end && self.start < window_end && self.end > window_start
    }
}
