// Event module
// The single event every surface counts down to

use super::countdown::{TargetError, TargetInstant};

pub const EVENT_NAME: &str = "YC Demo Day";
pub const EVENT_SHORT_NAME: &str = "Demo Day";
pub const EVENT_DATE_STRING: &str = "Tuesday, June 16, 2026";

/// Display labels plus the calendar date of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownEvent {
    pub name: &'static str,
    /// Used where the full name does not fit, e.g. the inline widget.
    pub short_name: &'static str,
    pub date_string: &'static str,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// YC Demo Day, counted down to local midnight.
pub const DEMO_DAY: CountdownEvent = CountdownEvent {
    name: EVENT_NAME,
    short_name: EVENT_SHORT_NAME,
    date_string: EVENT_DATE_STRING,
    year: 2026,
    month: 6,
    day: 16,
};

impl CountdownEvent {
    /// Midnight at the start of the event date.
    pub fn target(&self) -> Result<TargetInstant, TargetError> {
        TargetInstant::from_ymd(self.year, self.month, self.day)
    }
}
