//! Search input: the date range, the daily work window, and the duration and
//! exclusion settings that apply to every day.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::time_of_day::TimeOfDay;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl SearchWindow {
    /// # Errors
    /// Returns `FinderError::InvalidRange` if `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        let window = SearchWindow { from, to };
        window.validate()?;
        Ok(window)
    }

    pub fn single_day(day: NaiveDate) -> Self {
        SearchWindow { from: day, to: day }
    }

    pub fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(FinderError::InvalidRange {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }

    /// Days from `from` through `to`, ascending. Empty when the range is inverted.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }

    /// Number of days in the range; zero when inverted.
    pub fn len(&self) -> usize {
        if self.from > self.to {
            0
        } else {
            (self.to - self.from).num_days() as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything one free-time search needs besides the events themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub window: SearchWindow,
    pub start_of_day: TimeOfDay,
    pub end_of_day: TimeOfDay,
    /// Shortest free interval worth reporting.
    pub min_free: TimeOfDay,
    /// Padding required before and after every busy event.
    pub transit: TimeOfDay,
    pub ignore_all_day: bool,
    pub ignore_holidays: bool,
}

impl SearchParameters {
    /// Parameters with no minimum, no transit, and both exclusion flags on.
    pub fn new(window: SearchWindow, start_of_day: TimeOfDay, end_of_day: TimeOfDay) -> Self {
        SearchParameters {
            window,
            start_of_day,
            end_of_day,
            min_free: TimeOfDay::MIDNIGHT,
            transit: TimeOfDay::MIDNIGHT,
            ignore_all_day: true,
            ignore_holidays: true,
        }
    }

    pub fn with_min_free(mut self, min_free: TimeOfDay) -> Self {
        self.min_free = min_free;
        self
    }

    pub fn with_transit(mut self, transit: TimeOfDay) -> Self {
        self.transit = transit;
        self
    }

    pub fn with_ignore_all_day(mut self, ignore: bool) -> Self {
        self.ignore_all_day = ignore;
        self
    }

    pub fn with_ignore_holidays(mut self, ignore: bool) -> Self {
        self.ignore_holidays = ignore;
        self
    }

    pub fn min_free_duration(&self) -> Duration {
        self.min_free.as_duration()
    }

    pub fn transit_duration(&self) -> Duration {
        self.transit.as_duration()
    }

    /// Length of the daily work window in wall-clock terms.
    pub fn work_window_duration(&self) -> Duration {
        self.end_of_day.as_duration() - self.start_of_day.as_duration()
    }

    /// Check that a search with these parameters can produce anything.
    ///
    /// The work window must hold the minimum free duration plus one transit
    /// buffer on each side.
    ///
    /// # Errors
    /// - `FinderError::InvalidRange` if the date range is inverted.
    /// - `FinderError::InvalidWorkWindow` if the work window does not end after it starts.
    /// - `FinderError::WorkWindowTooShort` if the window cannot fit a buffered slot.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;

        if self.end_of_day <= self.start_of_day {
            return Err(FinderError::InvalidWorkWindow {
                start: self.start_of_day,
                end: self.end_of_day,
            });
        }

        let required = self.min_free_duration() + self.transit_duration() * 2;
        let available = self.work_window_duration();
        if required > available {
            return Err(FinderError::WorkWindowTooShort {
                required_minutes: required.num_minutes(),
                available_minutes: available.num_minutes(),
            });
        }

        Ok(())
    }

    pub fn is_searchable(&self) -> bool {
        self.validate().is_ok()
    }
}
