//! DST transition policies for work-window boundaries.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Policy for wall-clock times that do not exist on a given day
/// (e.g., 02:30 during a spring-forward transition).
///
/// Ambiguous wall-clock times (fall-back overlap) always resolve to the
/// earliest of the two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DstPolicy {
    /// Move the time forward by the length of the gap (02:30 becomes 03:30)
    #[default]
    ShiftForward,
    /// Treat the time as unresolvable; the day's work window is empty
    Skip,
}

/// Resolve a local wall-clock datetime in `tz` to a UTC instant.
///
/// Returns `None` only when the time falls in a DST gap and the policy is
/// [`DstPolicy::Skip`].
pub fn resolve_local(tz: &Tz, naive: &NaiveDateTime, policy: DstPolicy) -> Option<DateTime<Utc>> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt.with_timezone(&Utc));
    }

    match policy {
        DstPolicy::Skip => None,
        DstPolicy::ShiftForward => {
            // Read the naive time with the offset in force before the gap;
            // the resulting instant lands after the transition.
            let before = tz
                .from_local_datetime(&(*naive - Duration::days(1)))
                .earliest()?;
            let offset = before.offset().fix();
            let shifted = offset.from_local_datetime(naive).single()?;
            Some(shifted.with_timezone(&Utc))
        }
    }
}
