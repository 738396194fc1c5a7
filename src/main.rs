// Demo Day Countdown
// Main entry point

use clap::Parser;

use demo_day_countdown::shells::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Demo Day Countdown");

    shells::run(cli)
}
