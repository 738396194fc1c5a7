use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::services::countdown::WidgetFamily;

/// Countdown to YC Demo Day for the terminal, the menu bar and widgets.
#[derive(Debug, Parser)]
#[command(name = "demo-day-countdown", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Full-screen countdown refreshed every second
    App {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Menu-bar title line refreshed every second
    Menubar {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
        /// Flip compact mode (icon only) and remember the choice
        #[arg(long)]
        toggle_compact: bool,
        /// Preferences file to use instead of the platform default
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
    /// Precomputed widget timeline for the next four hours
    Widget {
        #[arg(long, value_enum, default_value_t = FamilyArg::Small)]
        family: FamilyArg,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the countdown once and exit
    Once {
        /// Omit seconds
        #[arg(long)]
        short: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Rectangular,
    Circular,
    Inline,
    Small,
}

impl From<FamilyArg> for WidgetFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Rectangular => WidgetFamily::Rectangular,
            FamilyArg::Circular => WidgetFamily::Circular,
            FamilyArg::Inline => WidgetFamily::Inline,
            FamilyArg::Small => WidgetFamily::Small,
        }
    }
}
