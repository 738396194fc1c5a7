//! Menu-bar shell: a title line next to the icon plus a small drop-down menu.

use std::io::{self, Write};

use anyhow::Result;

use crate::models::countdown::RemainingBreakdown;
use crate::models::event::CountdownEvent;
use crate::models::settings::DisplayOptions;
use crate::services::countdown::formatter::{format_or_elapsed, menu_bar_title, FormatStyle};
use crate::services::countdown::CountdownEngine;
use crate::services::schedule::{Clock, RefreshTicker, CONTINUOUS_INTERVAL};
use crate::services::settings::{load_or_default, toggle_compact_mode, PreferenceStore};

const ICON: &str = "[Y]";

/// Header of the drop-down: event name over the live long-form countdown.
pub fn header_lines(event: &CountdownEvent, remaining: Option<&RemainingBreakdown>) -> [String; 2] {
    [
        event.name.to_string(),
        format_or_elapsed(remaining, FormatStyle::Long),
    ]
}

pub fn event_info_label(event: &CountdownEvent) -> String {
    format!("{} — {}", event.name, event.date_string)
}

/// Label of the menu item that switches display mode.
pub fn compact_toggle_label(options: DisplayOptions) -> &'static str {
    if options.compact_mode {
        "Show Countdown in Menu Bar"
    } else {
        "Compact Mode (Icon Only)"
    }
}

/// Every drop-down row, top to bottom, with `---` for separators.
pub fn menu_lines(
    event: &CountdownEvent,
    remaining: Option<&RemainingBreakdown>,
    options: DisplayOptions,
) -> Vec<String> {
    let [name, countdown] = header_lines(event, remaining);
    vec![
        name,
        countdown,
        "---".to_string(),
        event_info_label(event),
        "---".to_string(),
        compact_toggle_label(options).to_string(),
        "---".to_string(),
        "Quit".to_string(),
    ]
}

/// Status item text: the icon followed by the title, if any.
pub fn status_line(remaining: Option<&RemainingBreakdown>, options: DisplayOptions) -> String {
    format!("{ICON}{}", menu_bar_title(remaining, options))
}

/// Prints the menu once, then refreshes the status line every second.
pub fn run<C: Clock + 'static>(
    engine: CountdownEngine,
    event: CountdownEvent,
    clock: C,
    store: &dyn PreferenceStore,
    toggle_compact: bool,
    max_ticks: Option<u64>,
) -> Result<u64> {
    let prefs = if toggle_compact {
        toggle_compact_mode(store)?
    } else {
        load_or_default(store)
    };
    let options = prefs.display_options();
    log::info!(
        "Starting menu bar shell (compact mode {})",
        if options.compact_mode { "on" } else { "off" }
    );

    let now = clock.now();
    for line in menu_lines(&event, engine.remaining(now).as_ref(), options) {
        println!("{line}");
    }

    let mut ticker = RefreshTicker::new(engine, clock, CONTINUOUS_INTERVAL);
    if let Some(limit) = max_ticks {
        ticker = ticker.with_max_ticks(limit);
    }

    let handle = ticker.spawn(move |tick| {
        let line = status_line(tick.remaining.as_ref(), options);
        let mut out = io::stdout().lock();
        if let Err(err) = write!(out, "\r\x1B[2K{line}").and_then(|_| out.flush()) {
            log::warn!("Failed to update menu bar title: {err}");
        }
    })?;

    let delivered = handle.join();
    println!();
    log::info!("Menu bar shell finished after {} refreshes", delivered);
    Ok(delivered)
}
