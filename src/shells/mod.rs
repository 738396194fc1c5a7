//! Host shells: independent adapters that query the engine on their own
//! cadence and render its output. They share nothing but the target.

pub mod app;
pub mod cli;
pub mod menubar;
pub mod widget;

use anyhow::{Context, Result};

use crate::models::event::DEMO_DAY;
use crate::services::countdown::{format_or_elapsed, CountdownEngine, FormatStyle};
use crate::services::schedule::{Clock, SystemClock};
use crate::services::settings::TomlPreferenceStore;

pub use cli::{Cli, Command, FamilyArg};

/// Dispatches a parsed command line to its shell.
pub fn run(cli: Cli) -> Result<()> {
    let event = DEMO_DAY;
    let engine = CountdownEngine::for_event(&event)
        .context("invalid target date configured for the countdown")?;
    log::debug!("Counting down to {} ({})", event.name, engine.target().naive());

    match cli.command.unwrap_or(Command::Once { short: false }) {
        Command::App { ticks } => {
            app::run(engine, event, SystemClock, ticks)?;
        }
        Command::Menubar {
            ticks,
            toggle_compact,
            preferences,
        } => {
            let store = match preferences {
                Some(path) => TomlPreferenceStore::new(path),
                None => TomlPreferenceStore::at_default_location(),
            };
            log::debug!("Using preferences at {}", store.path().display());
            menubar::run(engine, event, SystemClock, &store, toggle_compact, ticks)?;
        }
        Command::Widget { family, json } => {
            let output = widget::run(&engine, &event, family.into(), &SystemClock.now(), json)?;
            println!("{output}");
        }
        Command::Once { short } => {
            let style = if short {
                FormatStyle::Short
            } else {
                FormatStyle::Long
            };
            let remaining = engine.remaining(SystemClock.now());
            println!("{}: {}", event.name, format_or_elapsed(remaining.as_ref(), style));
        }
    }
    Ok(())
}
