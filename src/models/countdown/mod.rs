use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::resolve_local;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Raised once at start-up when the configured target is not a real calendar value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("invalid target date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invalid target time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
}

/// The fixed wall-clock moment being counted down to.
///
/// Stored without a zone and resolved against the zone of each query, so the
/// countdown always ends at local midnight of the target date for whoever is
/// looking at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetInstant {
    local: NaiveDateTime,
}

impl TargetInstant {
    /// Midnight at the start of the given calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TargetError> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TargetError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TargetError::InvalidDate { year, month, day })?;
        let local = date
            .and_hms_opt(hour, minute, second)
            .ok_or(TargetError::InvalidTime {
                hour,
                minute,
                second,
            })?;
        Ok(Self { local })
    }

    pub const fn from_naive(local: NaiveDateTime) -> Self {
        Self { local }
    }

    /// The target as a wall-clock value.
    pub fn naive(&self) -> NaiveDateTime {
        self.local
    }

    pub fn resolve_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        resolve_local(tz, &self.local)
    }

    /// Resolves against the process-local zone as it is right now.
    pub fn resolve_local(&self) -> DateTime<Local> {
        self.resolve_in(&Local)
    }
}

/// Calendar-field decomposition of the time left before the target.
///
/// Field order gives the derived ordering: days, then hours, minutes, seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RemainingBreakdown {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingBreakdown {
    /// Builds a breakdown from whole days plus a remainder in seconds.
    ///
    /// Only the extra hour of a DST fall-back day can push the remainder to a
    /// full day or more. It holds at 23:59:59 until the elapsed time drops
    /// back under a day, so later queries never show more time left.
    pub fn from_parts(days: u64, remainder_secs: u64) -> Self {
        if remainder_secs >= SECONDS_PER_DAY {
            return Self {
                days,
                hours: 23,
                minutes: 59,
                seconds: 59,
            };
        }
        let rest = remainder_secs;
        Self {
            days,
            hours: (rest / SECONDS_PER_HOUR) as u8,
            minutes: ((rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (rest % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Seconds represented by the fields, counting every day as 24 hours.
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECONDS_PER_DAY)
            .saturating_add(u64::from(self.hours) * SECONDS_PER_HOUR)
            .saturating_add(u64::from(self.minutes) * SECONDS_PER_MINUTE)
            .saturating_add(u64::from(self.seconds))
    }
}

impl fmt::Display for RemainingBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// One precomputed sample for a surface that cannot refresh continuously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: DateTime<FixedOffset>,
    pub remaining: Option<RemainingBreakdown>,
}

impl TimelineEntry {
    pub fn is_elapsed(&self) -> bool {
        self.remaining.is_none()
    }
}
