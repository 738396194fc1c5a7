// Property-based tests for the countdown engine
// Random query instants around the target, in several zones

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Europe::Berlin;
use demo_day_countdown::services::countdown::{format_long, format_short};
use fixtures::{dates, engines};
use proptest::prelude::*;

/// Seconds before the target covered by the generated instants (about three years).
const SPAN_SECS: i64 = 3 * 366 * 24 * 3600;

/// Seconds in the final two days before a target.
const LAST_TWO_DAYS_SECS: i64 = 48 * 3600;

fn before_target(offset_secs: i64) -> DateTime<Utc> {
    dates::target_moment() - Duration::seconds(offset_secs)
}

proptest! {
    /// Property: every field stays inside its calendar range
    #[test]
    fn prop_fields_are_bounded(offset in 1..SPAN_SECS) {
        let now = before_target(offset);
        let remaining = engines::demo_day().remaining_in(&now);
        prop_assert!(remaining.is_some());
        let r = remaining.unwrap();
        prop_assert!(r.hours <= 23);
        prop_assert!(r.minutes <= 59);
        prop_assert!(r.seconds <= 59);
    }

    /// Property: at or after the target there is never a breakdown
    #[test]
    fn prop_elapsed_at_or_after_target(offset in 0..SPAN_SECS) {
        let now = dates::target_moment() + Duration::seconds(offset);
        prop_assert_eq!(engines::demo_day().remaining_in(&now), None);
    }

    /// Property: later queries never show more time left
    #[test]
    fn prop_monotonic_non_increasing(a in 1..SPAN_SECS, b in 1..SPAN_SECS) {
        let (earlier, later) = (before_target(a.max(b)), before_target(a.min(b)));
        let engine = engines::demo_day();
        let first = engine.remaining_in(&earlier).unwrap();
        let second = engine.remaining_in(&later).unwrap();
        prop_assert!(first >= second, "{:?} < {:?}", first, second);
    }

    /// Property: in a zone without DST the fields add back up to the elapsed seconds
    #[test]
    fn prop_fixed_offset_total_matches_duration(offset in 1..SPAN_SECS, hours in -12..=14i32) {
        let tz = FixedOffset::east_opt(hours * 3600).unwrap();
        let target = engines::demo_day().target().resolve_in(&tz);
        let now = target - Duration::seconds(offset);
        let r = engines::demo_day().remaining_in(&now).unwrap();
        prop_assert_eq!(r.total_seconds(), offset as u64);
    }

    /// Property: approaching the target from below tends to all-zero fields
    #[test]
    fn prop_last_minute_has_no_days_or_hours(offset in 1..60i64) {
        let r = engines::demo_day().remaining_in(&before_target(offset)).unwrap();
        prop_assert_eq!((r.days, r.hours, r.minutes), (0, 0, 0));
        prop_assert_eq!(i64::from(r.seconds), offset);
    }

    /// Property: DST transitions never push hours out of range
    #[test]
    fn prop_bounded_across_dst(offset in 1..SPAN_SECS) {
        let engine = engines::midnight_of(2026, 3, 30);
        let target = engine.target().resolve_in(&Berlin);
        let now = target - Duration::seconds(offset);
        let r = engine.remaining_in(&now).unwrap();
        prop_assert!(r.hours <= 23 && r.minutes <= 59 && r.seconds <= 59);
    }

    /// Property: the 25-hour fall-back day never makes a later query show more time left
    #[test]
    fn prop_monotonic_across_fall_back(a in 1..LAST_TWO_DAYS_SECS, b in 1..LAST_TWO_DAYS_SECS) {
        // New York repeats 01:00-02:00 on 2025-11-02.
        let engine = engines::midnight_of(2025, 11, 3);
        let target = engine.target().resolve_in(&New_York);
        let earlier = target - Duration::seconds(a.max(b));
        let later = target - Duration::seconds(a.min(b));
        let first = engine.remaining_in(&earlier).unwrap();
        let second = engine.remaining_in(&later).unwrap();
        prop_assert!(second.hours <= 23);
        prop_assert!(first >= second, "{} at {} < {} at {}", first, earlier, second, later);
    }

    /// Property: the skipped spring-forward hour never makes a later query show more time left
    #[test]
    fn prop_monotonic_across_spring_forward(a in 1..LAST_TWO_DAYS_SECS, b in 1..LAST_TWO_DAYS_SECS) {
        // Berlin skips 02:00-03:00 on 2025-03-30.
        let engine = engines::midnight_of(2025, 3, 31);
        let target = engine.target().resolve_in(&Berlin);
        let earlier = target - Duration::seconds(a.max(b));
        let later = target - Duration::seconds(a.min(b));
        let first = engine.remaining_in(&earlier).unwrap();
        let second = engine.remaining_in(&later).unwrap();
        prop_assert!(first >= second, "{} at {} < {} at {}", first, earlier, second, later);
    }

    /// Property: formatting is a pure function of the breakdown
    #[test]
    fn prop_formatting_is_deterministic(offset in 1..SPAN_SECS) {
        let r = engines::demo_day().remaining_in(&before_target(offset)).unwrap();
        prop_assert_eq!(format_long(&r), format_long(&r));
        prop_assert_eq!(format_short(&r), format_short(&r));
        prop_assert!(format_long(&r).starts_with(&format_short(&r)));
    }
}

#[test]
fn target_resolves_to_local_midnight_in_each_zone() {
    let engine = engines::demo_day();
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let resolved = engine.target().resolve_in(&tz);
    assert_eq!(resolved.naive_local(), dates::naive(2026, 6, 16, 0, 0, 0));
    assert_eq!(resolved, tz.with_ymd_and_hms(2026, 6, 16, 0, 0, 0).unwrap());
}
