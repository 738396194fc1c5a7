//! Refresh policies for the host shells.
//!
//! The countdown core never schedules anything itself. These policies bound
//! how stale a displayed value may get: continuously visible surfaces re-query
//! at least once per second, and surfaces that only wake periodically
//! precompute a [`Timeline`] covering their lookahead window.

mod clock;
mod ticker;
mod timeline;

use std::time::Duration as StdDuration;

use chrono::Duration;

pub use clock::{Clock, SystemClock};
pub use ticker::{RefreshTicker, Tick, TickerHandle};
pub use timeline::{build_timeline, Timeline, TimelineReload};

/// Re-query interval for a continuously visible surface.
pub const CONTINUOUS_INTERVAL: StdDuration = StdDuration::from_secs(1);

/// How far ahead a periodically refreshed surface precomputes.
pub const TIMELINE_LOOKAHEAD_MINUTES: i64 = 4 * 60;

/// Spacing between precomputed samples.
pub const TIMELINE_STEP_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Re-query on a fixed timer while visible.
    Continuous { interval: StdDuration },
    /// Precompute samples every `step` up to `lookahead`, then wake again.
    Timeline { lookahead: Duration, step: Duration },
}

impl RefreshPolicy {
    /// One query per second, enough to keep the seconds field accurate.
    pub fn interactive() -> Self {
        Self::Continuous {
            interval: CONTINUOUS_INTERVAL,
        }
    }

    /// Four hours of samples, one every fifteen minutes.
    pub fn widget() -> Self {
        Self::Timeline {
            lookahead: Duration::minutes(TIMELINE_LOOKAHEAD_MINUTES),
            step: Duration::minutes(TIMELINE_STEP_MINUTES),
        }
    }

    /// Longest a surface following this policy can show one value.
    pub fn max_staleness(&self) -> StdDuration {
        match self {
            Self::Continuous { interval } => *interval,
            Self::Timeline { step, .. } => step.to_std().unwrap_or(StdDuration::ZERO),
        }
    }

    /// Whether the policy keeps its surface within the freshness contract.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Continuous { interval } => {
                !interval.is_zero() && *interval <= CONTINUOUS_INTERVAL
            }
            Self::Timeline { lookahead, step } => {
                *step > Duration::zero() && step <= lookahead
            }
        }
    }
}
