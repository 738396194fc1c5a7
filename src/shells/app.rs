//! Full-screen shell: event name, date, and one large value per unit.

use std::io::{self, Write};

use anyhow::Result;

use crate::models::countdown::RemainingBreakdown;
use crate::models::event::CountdownEvent;
use crate::services::countdown::formatter::{app_units, ELAPSED_MESSAGE};
use crate::services::countdown::CountdownEngine;
use crate::services::schedule::{Clock, RefreshTicker, CONTINUOUS_INTERVAL};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub fn render_frame(event: &CountdownEvent, remaining: Option<&RemainingBreakdown>) -> String {
    let body = match remaining {
        Some(breakdown) => app_units(breakdown)
            .iter()
            .map(|(value, label)| format!("{value} {label}"))
            .collect::<Vec<_>>()
            .join("   "),
        None => ELAPSED_MESSAGE.to_string(),
    };
    format!("{}\n{}\n\n{}", event.name, event.date_string, body)
}

/// Redraws the frame every second until the target is reached or `max_ticks` runs out.
pub fn run<C: Clock + 'static>(
    engine: CountdownEngine,
    event: CountdownEvent,
    clock: C,
    max_ticks: Option<u64>,
) -> Result<u64> {
    log::info!("Starting app shell for {}", event.name);

    let mut ticker = RefreshTicker::new(engine, clock, CONTINUOUS_INTERVAL);
    if let Some(limit) = max_ticks {
        ticker = ticker.with_max_ticks(limit);
    }

    let handle = ticker.spawn(move |tick| {
        let frame = render_frame(&event, tick.remaining.as_ref());
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{CLEAR_SCREEN}{frame}").and_then(|_| out.flush()) {
            log::warn!("Failed to draw countdown frame: {err}");
        }
    })?;

    let delivered = handle.join();
    log::info!("App shell finished after {} refreshes", delivered);
    Ok(delivered)
}
