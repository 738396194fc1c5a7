// Test fixtures - reusable test data
// Provides consistent instants and engines across all test files

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use demo_day_countdown::{CountdownEngine, RemainingBreakdown, TargetInstant};

/// Sample instants around the Demo Day target
pub mod dates {
    use super::*;

    pub fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&naive(y, m, d, h, min, s))
    }

    /// Returns June 13, 2026 at 12:30:45, the documented example query
    pub fn scenario_now() -> DateTime<Utc> {
        utc(2026, 6, 13, 12, 30, 45)
    }

    /// Returns the target itself, June 16, 2026 at midnight
    pub fn target_moment() -> DateTime<Utc> {
        utc(2026, 6, 16, 0, 0, 0)
    }

    /// Returns one second past the target
    pub fn just_after_target() -> DateTime<Utc> {
        utc(2026, 6, 16, 0, 0, 1)
    }
}

/// Engines used across tests
pub mod engines {
    use super::*;

    pub fn demo_day() -> CountdownEngine {
        CountdownEngine::for_event(&demo_day_countdown::DEMO_DAY).unwrap()
    }

    pub fn midnight_of(year: i32, month: u32, day: u32) -> CountdownEngine {
        CountdownEngine::new(TargetInstant::from_ymd(year, month, day).unwrap())
    }
}

pub fn breakdown(days: u64, hours: u8, minutes: u8, seconds: u8) -> RemainingBreakdown {
    RemainingBreakdown {
        days,
        hours,
        minutes,
        seconds,
    }
}
