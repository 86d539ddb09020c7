//! Tests for the interval layer: clipping, transit buffering, merging, gaps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use free_time_engine::freebusy::{
    buffer_busy_periods, find_free_slots, free_gaps, merge_busy_periods,
};

/// Helper to build a (start, end) pair from hour/minute values on 2026-03-02.
fn busy(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    (at(start_hour, start_min), at(end_hour, end_min))
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, min, 0).unwrap()
}

#[test]
fn single_busy_period_produces_two_free_slots() {
    // Window: 08:00-17:00, busy: 10:00-11:00
    let slots = find_free_slots(
        &[busy(10, 0, 11, 0)],
        at(8, 0),
        at(17, 0),
        Duration::zero(),
        Duration::zero(),
    );

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (at(8, 0), at(10, 0)));
    assert_eq!(slots[0].duration_minutes, 120);
    assert_eq!((slots[1].start, slots[1].end), (at(11, 0), at(17, 0)));
    assert_eq!(slots[1].duration_minutes, 360);
}

#[test]
fn transit_buffer_pads_both_sides() {
    // Window: 09:00-18:00, busy: 12:00-13:00, transit 15 min → blocked 11:45-13:15
    let slots = find_free_slots(
        &[busy(12, 0, 13, 0)],
        at(9, 0),
        at(18, 0),
        Duration::minutes(15),
        Duration::hours(1),
    );

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (at(9, 0), at(11, 45)));
    assert_eq!((slots[1].start, slots[1].end), (at(13, 15), at(18, 0)));
}

#[test]
fn buffer_never_extends_outside_window() {
    // busy 08:50-09:10 around the window start, 17:55-18:30 across the end.
    let padded = buffer_busy_periods(
        &[busy(8, 50, 9, 10), busy(17, 55, 18, 30)],
        at(9, 0),
        at(18, 0),
        Duration::minutes(30),
    );

    assert_eq!(padded, vec![busy(9, 0, 9, 40), busy(17, 25, 18, 0)]);
}

#[test]
fn periods_outside_window_do_not_leak_buffer_in() {
    // 08:00-08:55 ends before the window; its 30 min buffer must not matter.
    let padded = buffer_busy_periods(
        &[busy(8, 0, 8, 55), busy(18, 0, 19, 0)],
        at(9, 0),
        at(18, 0),
        Duration::minutes(30),
    );

    assert!(padded.is_empty(), "non-overlapping periods are dropped before padding");
}

#[test]
fn zero_length_period_does_not_split_window() {
    let slots = find_free_slots(
        &[busy(12, 0, 12, 0)],
        at(9, 0),
        at(18, 0),
        Duration::minutes(15),
        Duration::zero(),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!((slots[0].start, slots[0].end), (at(9, 0), at(18, 0)));
    assert!(buffer_busy_periods(&[busy(12, 0, 12, 0)], at(9, 0), at(18, 0), Duration::minutes(15)).is_empty());
}

#[test]
fn overlapping_periods_merged() {
    let merged = merge_busy_periods(vec![busy(11, 0, 12, 0), busy(10, 0, 11, 30)]);
    assert_eq!(merged, vec![busy(10, 0, 12, 0)]);
}

#[test]
fn touching_periods_merged() {
    let merged = merge_busy_periods(vec![busy(10, 0, 11, 0), busy(11, 0, 12, 0)]);
    assert_eq!(merged, vec![busy(10, 0, 12, 0)]);
}

#[test]
fn contained_period_does_not_shrink_block() {
    let merged = merge_busy_periods(vec![busy(9, 0, 15, 0), busy(10, 0, 11, 0)]);
    assert_eq!(merged, vec![busy(9, 0, 15, 0)]);
}

#[test]
fn buffers_can_join_nearby_periods() {
    // 10:00-11:00 and 11:20-12:00 with 10 min transit: 09:50-11:10 and 11:10-12:10 touch.
    let slots = find_free_slots(
        &[busy(10, 0, 11, 0), busy(11, 20, 12, 0)],
        at(9, 0),
        at(13, 0),
        Duration::minutes(10),
        Duration::zero(),
    );

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (at(9, 0), at(9, 50)));
    assert_eq!((slots[1].start, slots[1].end), (at(12, 10), at(13, 0)));
}

#[test]
fn no_busy_periods_entire_window_is_free() {
    let gaps = free_gaps(&[], at(8, 0), at(17, 0));

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].start, at(8, 0));
    assert_eq!(gaps[0].end, at(17, 0));
    assert_eq!(gaps[0].duration_minutes, 540);
}

#[test]
fn busy_period_filling_window_leaves_nothing() {
    let slots = find_free_slots(
        &[busy(9, 0, 12, 0)],
        at(9, 0),
        at(12, 0),
        Duration::zero(),
        Duration::zero(),
    );
    assert!(slots.is_empty());
}

#[test]
fn gap_equal_to_minimum_is_kept() {
    // Gap 10:00-11:00 is exactly 60 min.
    let slots = find_free_slots(
        &[busy(9, 0, 10, 0), busy(11, 0, 12, 0)],
        at(9, 0),
        at(12, 0),
        Duration::zero(),
        Duration::hours(1),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!((slots[0].start, slots[0].end), (at(10, 0), at(11, 0)));
}

#[test]
fn short_gaps_are_not_combined_across_a_block() {
    // Two 30 min gaps around a 5 min block; neither reaches 45 min.
    let slots = find_free_slots(
        &[busy(9, 30, 9, 35)],
        at(9, 0),
        at(10, 5),
        Duration::zero(),
        Duration::minutes(45),
    );
    assert!(slots.is_empty());
}

#[test]
fn multiple_gaps_between_periods() {
    // Window: 08:00-18:00, busy: 09-10, 12-13, 15-16
    let slots = find_free_slots(
        &[busy(9, 0, 10, 0), busy(12, 0, 13, 0), busy(15, 0, 16, 0)],
        at(8, 0),
        at(18, 0),
        Duration::zero(),
        Duration::zero(),
    );

    let minutes: Vec<i64> = slots.iter().map(|s| s.duration_minutes).collect();
    assert_eq!(minutes, vec![60, 120, 120, 120]);
}

#[test]
fn empty_window_yields_nothing() {
    let slots = find_free_slots(&[], at(12, 0), at(12, 0), Duration::zero(), Duration::zero());
    assert!(slots.is_empty());

    let slots = find_free_slots(&[], at(12, 0), at(11, 0), Duration::zero(), Duration::zero());
    assert!(slots.is_empty());
}
