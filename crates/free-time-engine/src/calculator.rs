//! Per-day work windows and time-of-day durations.
//!
//! Every search runs in one fixed IANA time zone, but each day is converted
//! with its own wall-clock offset: a 09:00-18:00 window stays 09:00-18:00
//! local time on both sides of a DST transition.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::dst::{self, DstPolicy};
use crate::error::{FinderError, Result};
use crate::time_of_day::TimeOfDay;

/// The absolute work window of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWorkWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWorkWindow {
    /// A window with no room in it, anchored at `at`.
    pub fn empty_at(at: DateTime<Utc>) -> Self {
        DayWorkWindow { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the window; zero for empty windows.
    pub fn duration(&self) -> Duration {
        if self.is_empty() {
            Duration::zero()
        } else {
            self.end - self.start
        }
    }

    pub fn contains(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start <= start && end <= self.end
    }
}

/// Combines calendar days with time-of-day values in a fixed time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayWindowCalculator {
    tz: Tz,
    dst_policy: DstPolicy,
}

impl Default for DayWindowCalculator {
    fn default() -> Self {
        DayWindowCalculator::new(Tz::UTC)
    }
}

impl DayWindowCalculator {
    pub fn new(tz: Tz) -> Self {
        DayWindowCalculator {
            tz,
            dst_policy: DstPolicy::default(),
        }
    }

    /// Build a calculator from an IANA time zone name (e.g., "Europe/Berlin").
    ///
    /// # Errors
    /// Returns `FinderError::InvalidTimezone` if the name is not a known IANA zone.
    pub fn for_timezone(name: &str) -> Result<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|_| FinderError::InvalidTimezone(format!("'{}'", name)))?;
        Ok(DayWindowCalculator::new(tz))
    }

    pub fn with_dst_policy(mut self, dst_policy: DstPolicy) -> Self {
        self.dst_policy = dst_policy;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn dst_policy(&self) -> DstPolicy {
        self.dst_policy
    }

    /// The instant at which the wall clock in this zone reads `time` on `day`.
    pub fn local_instant(&self, day: NaiveDate, time: TimeOfDay) -> Option<DateTime<Utc>> {
        let naive = day.and_time(time.to_naive_time());
        dst::resolve_local(&self.tz, &naive, self.dst_policy)
    }

    /// The absolute work window for `day`.
    ///
    /// The window is empty when `end_of_day` is not after `start_of_day`, or
    /// when a boundary falls into a DST gap under [`DstPolicy::Skip`].
    pub fn day_window(
        &self,
        day: NaiveDate,
        start_of_day: TimeOfDay,
        end_of_day: TimeOfDay,
    ) -> DayWorkWindow {
        let start = self.local_instant(day, start_of_day);
        let end = self.local_instant(day, end_of_day);

        match (start, end) {
            (Some(start), Some(end)) if end_of_day > start_of_day => DayWorkWindow { start, end },
            (Some(at), _) | (None, Some(at)) => DayWorkWindow::empty_at(at),
            (None, None) => DayWorkWindow::empty_at(day.and_time(chrono::NaiveTime::MIN).and_utc()),
        }
    }

    /// Reinterpret a time-of-day value as a duration since midnight.
    pub fn duration_of(&self, t: TimeOfDay) -> Duration {
        t.as_duration()
    }
}
