use chrono::{DateTime, Local, TimeZone};

use crate::models::countdown::{RemainingBreakdown, TargetError, TargetInstant};
use crate::models::event::CountdownEvent;
use crate::utils::date::add_calendar_days;

/// Computes the time left before a fixed target.
///
/// Every query is independent: the engine holds nothing but the target, so a
/// copy can be handed to any number of timers or threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownEngine {
    target: TargetInstant,
}

impl CountdownEngine {
    pub const fn new(target: TargetInstant) -> Self {
        Self { target }
    }

    pub fn for_event(event: &CountdownEvent) -> Result<Self, TargetError> {
        Ok(Self::new(event.target()?))
    }

    pub fn target(&self) -> TargetInstant {
        self.target
    }

    /// Time left as seen from `now` in the process-local zone.
    /// Returns `None` once `now` has reached the target.
    pub fn remaining(&self, now: DateTime<Local>) -> Option<RemainingBreakdown> {
        self.remaining_in(&now)
    }

    /// Time left as seen from `now`, evaluated in the zone `now` carries.
    ///
    /// Days are counted in calendar steps that keep the wall-clock time of
    /// `now`; the rest is elapsed time, truncated to whole seconds.
    pub fn remaining_in<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<RemainingBreakdown> {
        let tz = now.timezone();
        let target = self.target.resolve_in(&tz);
        if *now >= target {
            return None;
        }

        let now_local = now.naive_local();
        let mut days = (self.target.naive().date() - now_local.date())
            .num_days()
            .max(0) as u64;

        // Step back until the anchor no longer overshoots the target; this
        // runs at most twice outside of DST transitions.
        let anchor = loop {
            if days == 0 {
                break now.clone();
            }
            match add_calendar_days(&tz, &now_local, days) {
                Some(anchor) if anchor <= target => break anchor,
                _ => days -= 1,
            }
        };

        let rest = target.signed_duration_since(anchor).num_seconds().max(0) as u64;
        Some(RemainingBreakdown::from_parts(days, rest))
    }

    pub fn is_elapsed(&self, now: DateTime<Local>) -> bool {
        self.remaining(now).is_none()
    }
}
