//! Day-by-day free-time search.
//!
//! For every day in the search range the finder asks the calculator for the
//! absolute work window, keeps the events that matter for that window, and
//! hands them to the interval layer, which pads them with the transit buffer,
//! merges them, and returns the gaps that are long enough.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, instrument};

use crate::calculator::DayWindowCalculator;
use crate::error::Result;
use crate::event::BusyEvent;
use crate::freebusy::{self, FreeInterval};
use crate::params::{SearchParameters, SearchWindow};
use crate::time_of_day::TimeOfDay;

/// Searches event lists for free time. Holds no state besides its calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeTimeFinder {
    calculator: DayWindowCalculator,
}

impl FreeTimeFinder {
    pub fn new(calculator: DayWindowCalculator) -> Self {
        FreeTimeFinder { calculator }
    }

    pub fn calculator(&self) -> &DayWindowCalculator {
        &self.calculator
    }

    /// Free intervals across every day of `params.window`, in chronological order.
    ///
    /// Never fails: an inverted date range or a work window that ends before it
    /// starts simply produces no intervals. Use [`FreeTimeFinder::find_checked`]
    /// to reject such input instead.
    #[instrument(
        level = "debug",
        skip(self, events, params),
        fields(
            tz = self.calculator.timezone().name(),
            days = params.window.len(),
            events = events.len()
        )
    )]
    pub fn find(&self, events: &[BusyEvent], params: &SearchParameters) -> Vec<FreeInterval> {
        let result: Vec<FreeInterval> = params
            .window
            .days()
            .flat_map(|day| self.find_in_day(events, day, params))
            .collect();

        debug!(intervals = result.len(), "free-time search finished");
        result
    }

    /// Like [`FreeTimeFinder::find`], but validates the parameters first.
    ///
    /// # Errors
    /// Any error from [`SearchParameters::validate`].
    pub fn find_checked(
        &self,
        events: &[BusyEvent],
        params: &SearchParameters,
    ) -> Result<Vec<FreeInterval>> {
        params.validate()?;
        Ok(self.find(events, params))
    }

    /// Free intervals for a single day.
    ///
    /// Days are independent of each other, so callers may run this for several
    /// days in parallel as long as they concatenate the results in date order.
    pub fn find_in_day(
        &self,
        events: &[BusyEvent],
        day: NaiveDate,
        params: &SearchParameters,
    ) -> Vec<FreeInterval> {
        let window = self
            .calculator
            .day_window(day, params.start_of_day, params.end_of_day);
        if window.is_empty() {
            debug!(%day, "empty work window, skipping day");
            return Vec::new();
        }

        let busy: Vec<(DateTime<Utc>, DateTime<Utc>)> = events
            .iter()
            .filter(|e| is_relevant(e, params))
            .filter(|e| e.overlaps(window.start, window.end))
            .map(|e| (e.start, e.end))
            .collect();

        let slots = freebusy::find_free_slots(
            &busy,
            window.start,
            window.end,
            self.calculator.duration_of(params.transit),
            self.calculator.duration_of(params.min_free),
        );

        debug!(%day, busy = busy.len(), free = slots.len(), "scanned day");
        slots
    }
}

/// Whether an event takes part in the search under the exclusion flags.
fn is_relevant(event: &BusyEvent, params: &SearchParameters) -> bool {
    if params.ignore_all_day && event.is_all_day {
        return false;
    }
    if params.ignore_holidays && event.is_holiday {
        return false;
    }
    true
}

/// Find free time in one call.
///
/// Convenience wrapper that builds the calculator for `tz` and the
/// [`SearchParameters`] from positional arguments.
#[allow(clippy::too_many_arguments)]
pub fn find_free_time(
    events: &[BusyEvent],
    window: SearchWindow,
    start_of_day: TimeOfDay,
    end_of_day: TimeOfDay,
    min_free: TimeOfDay,
    transit: TimeOfDay,
    ignore_all_day: bool,
    ignore_holidays: bool,
    tz: Tz,
) -> Vec<FreeInterval> {
    let params = SearchParameters {
        window,
        start_of_day,
        end_of_day,
        min_free,
        transit,
        ignore_all_day,
        ignore_holidays,
    };
    FreeTimeFinder::new(DayWindowCalculator::new(tz)).find(events, &params)
}
