// Date utility functions
// Wall-clock resolution shared by the countdown engine and the timeline builder

use chrono::{DateTime, Days, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Timelike};

/// Resolves a wall-clock value to an instant in `tz`.
///
/// Ambiguous values (DST fall-back) resolve to the earlier instant. Values
/// that do not exist (DST spring-forward gap) resolve to the first instant
/// after the gap, so every skipped wall-clock value maps to the same moment
/// and resolution never runs backwards as the wall clock advances.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => resolve_in_gap(tz, naive),
    }
}

fn resolve_in_gap<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    let Some(before) = naive
        .checked_sub_days(Days::new(1))
        .and_then(|before| tz.from_local_datetime(&before).earliest())
    else {
        return tz.from_utc_datetime(naive);
    };
    let offset_before = before.offset().fix();

    // Read with the pre-gap offset, the value lands at or past the transition.
    let past_gap = naive
        .checked_sub_signed(Duration::seconds(i64::from(offset_before.local_minus_utc())))
        .unwrap_or(*naive);

    // Bisect for the first second whose offset is no longer the pre-gap one.
    let (mut lo, mut hi) = (before.naive_utc(), past_gap);
    while hi - lo > Duration::seconds(1) {
        let mid = lo + (hi - lo) / 2;
        if tz.offset_from_utc_datetime(&mid).fix() == offset_before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let transition = hi.with_nanosecond(0).unwrap_or(hi);
    tz.from_utc_datetime(&transition)
}

/// Adds whole calendar days to a wall-clock value, keeping its time of day,
/// and resolves the result in `tz`. Returns `None` on calendar overflow.
pub fn add_calendar_days<Tz: TimeZone>(
    tz: &Tz,
    naive: &NaiveDateTime,
    days: u64,
) -> Option<DateTime<Tz>> {
    naive
        .checked_add_days(Days::new(days))
        .map(|stepped| resolve_local(tz, &stepped))
}
