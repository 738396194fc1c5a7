// Demo Day Countdown Library
// Exports the countdown core and the host shells for testing and reuse

pub mod models;
pub mod services;
pub mod shells;
pub mod utils;

pub use models::countdown::{RemainingBreakdown, TargetError, TargetInstant};
pub use models::event::{CountdownEvent, DEMO_DAY, EVENT_DATE_STRING, EVENT_NAME};
pub use services::countdown::{format_long, format_short, CountdownEngine, ELAPSED_MESSAGE};
