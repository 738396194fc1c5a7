//! Widget shell: renders a precomputed timeline for one widget family.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use serde::Serialize;

use crate::models::countdown::RemainingBreakdown;
use crate::models::event::CountdownEvent;
use crate::services::countdown::formatter::widget_lines;
use crate::services::countdown::{CountdownEngine, WidgetFamily};
use crate::services::schedule::{
    build_timeline, Timeline, TimelineReload, TIMELINE_LOOKAHEAD_MINUTES, TIMELINE_STEP_MINUTES,
};

#[derive(Debug, Serialize)]
struct RenderedEntry<'a> {
    date: DateTime<FixedOffset>,
    remaining: Option<&'a RemainingBreakdown>,
    lines: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RenderedTimeline<'a> {
    event: &'a str,
    family: &'static str,
    entries: Vec<RenderedEntry<'a>>,
    reload: TimelineReload,
}

/// Timeline for a widget woken at `now`, following the widget refresh policy.
fn widget_timeline<Tz: TimeZone>(engine: &CountdownEngine, now: &DateTime<Tz>) -> Timeline {
    build_timeline(
        engine,
        now,
        Duration::minutes(TIMELINE_LOOKAHEAD_MINUTES),
        Duration::minutes(TIMELINE_STEP_MINUTES),
    )
}

/// One line per entry (`<time>  <widget lines joined by " | ">`), then the reload policy.
fn render_text(event: &CountdownEvent, family: WidgetFamily, timeline: &Timeline) -> String {
    let mut out = Vec::with_capacity(timeline.entries.len() + 1);
    for entry in &timeline.entries {
        let lines = widget_lines(family, event, entry.remaining.as_ref());
        out.push(format!(
            "{}  {}",
            entry.date.format("%Y-%m-%d %H:%M:%S"),
            lines.join(" | ")
        ));
    }
    out.push(match timeline.reload {
        TimelineReload::After(at) => format!("reload after {}", at.format("%Y-%m-%d %H:%M:%S")),
        TimelineReload::Never => "reload never".to_string(),
    });
    out.join("\n")
}

fn render_json(event: &CountdownEvent, family: WidgetFamily, timeline: &Timeline) -> Result<String> {
    let rendered = RenderedTimeline {
        event: event.name,
        family: family.name(),
        entries: timeline
            .entries
            .iter()
            .map(|entry| RenderedEntry {
                date: entry.date,
                remaining: entry.remaining.as_ref(),
                lines: widget_lines(family, event, entry.remaining.as_ref()),
            })
            .collect(),
        reload: timeline.reload,
    };
    serde_json::to_string_pretty(&rendered).context("failed to serialize widget timeline")
}

pub fn run<Tz: TimeZone>(
    engine: &CountdownEngine,
    event: &CountdownEvent,
    family: WidgetFamily,
    now: &DateTime<Tz>,
    json: bool,
) -> Result<String> {
    let timeline = widget_timeline(engine, now);
    log::info!(
        "Rendering {} widget timeline with {} entries",
        family.name(),
        timeline.entries.len()
    );
    if json {
        render_json(event, family, &timeline)
    } else {
        Ok(render_text(event, family, &timeline))
    }
}
