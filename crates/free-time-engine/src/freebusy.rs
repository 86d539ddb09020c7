//! Compute free time slots from busy intervals inside one window.
//!
//! Clips busy intervals to the window, pads them with the transit buffer,
//! merges overlapping or touching periods, then computes the gaps between
//! merged periods.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A free time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        FreeInterval {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Clip busy intervals to the window, pad each side by `buffer`, and clip again.
///
/// Intervals that do not overlap the window are dropped before padding, so a
/// commitment just outside the window never pushes its buffer into it. Empty
/// intervals (`start >= end`) are dropped too.
pub fn buffer_busy_periods(
    busy: &[(DateTime<Utc>, DateTime<Utc>)],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    buffer: Duration,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    busy.iter()
        .filter(|&&(start, end)| start < end && start < window_end && end > window_start)
        .map(|&(start, end)| (start.max(window_start), end.min(window_end)))
        .map(|(start, end)| {
            (
                (start - buffer).max(window_start),
                (end + buffer).min(window_end),
            )
        })
        .collect()
}

/// Merge overlapping or adjacent busy periods.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
pub fn merge_busy_periods(
    mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or touching: extend the current block.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Gaps between merged busy blocks inside the window.
///
/// `merged` must be sorted and non-overlapping, as produced by
/// [`merge_busy_periods`].
pub fn free_gaps(
    merged: &[(DateTime<Utc>, DateTime<Utc>)],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeInterval> {
    let mut gaps = Vec::with_capacity(merged.len() + 1);
    let mut cursor = window_start;

    for (busy_start, busy_end) in merged {
        if cursor < *busy_start {
            gaps.push(FreeInterval::new(cursor, *busy_start));
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing gap after the last busy block.
    if cursor < window_end {
        gaps.push(FreeInterval::new(cursor, window_end));
    }

    gaps
}

/// Free slots of at least `min_duration` within the window, after padding every
/// busy interval by `buffer`.
///
/// Gaps are judged one by one; two short gaps are never joined across a busy
/// block, however short the block is.
pub fn find_free_slots(
    busy: &[(DateTime<Utc>, DateTime<Utc>)],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    buffer: Duration,
    min_duration: Duration,
) -> Vec<FreeInterval> {
    if window_start >= window_end {
        return Vec::new();
    }

    let buffered = buffer_busy_periods(busy, window_start, window_end, buffer);
    let merged = merge_busy_periods(buffered);

    free_gaps(&merged, window_start, window_end)
        .into_iter()
        .filter(|slot| slot.duration() >= min_duration)
        .collect()
}
