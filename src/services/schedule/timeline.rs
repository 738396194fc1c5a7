use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use serde::Serialize;

use super::{TIMELINE_LOOKAHEAD_MINUTES, TIMELINE_STEP_MINUTES};
use crate::models::countdown::TimelineEntry;
use crate::services::countdown::CountdownEngine;

/// When the owner of a timeline should ask for a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", content = "at", rename_all = "snake_case")]
pub enum TimelineReload {
    After(DateTime<FixedOffset>),
    /// The target has been reached; nothing further to compute.
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub reload: TimelineReload,
}

impl Timeline {
    /// The entry a surface should be showing at `at`: the latest one not after it.
    pub fn entry_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Option<&TimelineEntry> {
        self.entries.iter().rev().find(|entry| entry.date <= *at)
    }

    pub fn is_terminal(&self) -> bool {
        self.reload == TimelineReload::Never
    }
}

/// Samples the engine every `step` from `now` through `now + lookahead`.
///
/// The first elapsed sample ends the timeline and turns off reloading. A
/// non-positive `step` yields a single sample.
pub fn build_timeline<Tz: TimeZone>(
    engine: &CountdownEngine,
    now: &DateTime<Tz>,
    lookahead: Duration,
    step: Duration,
) -> Timeline {
    let samples = if step > Duration::zero() && lookahead >= Duration::zero() {
        lookahead.num_seconds() / step.num_seconds().max(1)
    } else {
        0
    };

    // The loop can end early at the target, so only the default window is reserved up front.
    let reserved = samples.clamp(0, TIMELINE_LOOKAHEAD_MINUTES / TIMELINE_STEP_MINUTES);
    let mut entries = Vec::with_capacity(usize::try_from(reserved).unwrap_or(0) + 1);
    let mut at = Some(now.clone());
    for _ in 0..=samples {
        let Some(sample_at) = at else {
            break;
        };

        let remaining = engine.remaining_in(&sample_at);
        entries.push(TimelineEntry {
            date: sample_at.fixed_offset(),
            remaining,
        });

        if remaining.is_none() {
            log::debug!(
                "Timeline reached the target at {}; stopping after {} entries",
                sample_at.fixed_offset(),
                entries.len()
            );
            return Timeline {
                entries,
                reload: TimelineReload::Never,
            };
        }

        at = sample_at.checked_add_signed(step);
    }

    let reload = match now.clone().checked_add_signed(lookahead) {
        Some(reload_at) => TimelineReload::After(reload_at.fixed_offset()),
        None => TimelineReload::Never,
    };

    log::debug!("Built timeline with {} entries, reload {:?}", entries.len(), reload);
    Timeline { entries, reload }
}
