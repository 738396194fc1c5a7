//! String templates for every display budget.
//!
//! All functions are total over any breakdown, and every surface goes through
//! [`format_or_elapsed`] (or one of the family helpers built on it) so the
//! elapsed message is applied uniformly.

use crate::models::countdown::RemainingBreakdown;
use crate::models::event::CountdownEvent;
use crate::models::settings::DisplayOptions;

/// Shown in place of a countdown once the target has been reached.
pub const ELAPSED_MESSAGE: &str = "It's here!";

/// Stand-in for the day count on the circular widget once elapsed.
pub const CIRCULAR_ELAPSED_SYMBOL: &str = "🎉";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// `2d 11h 29m 15s`
    Long,
    /// `2d 11h 29m`
    Short,
}

/// Display sizes offered by the home-screen/lock-screen widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetFamily {
    Rectangular,
    Circular,
    Inline,
    Small,
}

impl WidgetFamily {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Circular => "circular",
            Self::Inline => "inline",
            Self::Small => "small",
        }
    }
}

pub fn format_long(breakdown: &RemainingBreakdown) -> String {
    breakdown.to_string()
}

pub fn format_short(breakdown: &RemainingBreakdown) -> String {
    format!(
        "{}d {:02}h {:02}m",
        breakdown.days, breakdown.hours, breakdown.minutes
    )
}

pub fn format_with(breakdown: &RemainingBreakdown, style: FormatStyle) -> String {
    match style {
        FormatStyle::Long => format_long(breakdown),
        FormatStyle::Short => format_short(breakdown),
    }
}

/// Formats an engine result, substituting [`ELAPSED_MESSAGE`] for `None`.
pub fn format_or_elapsed(remaining: Option<&RemainingBreakdown>, style: FormatStyle) -> String {
    match remaining {
        Some(breakdown) => format_with(breakdown, style),
        None => ELAPSED_MESSAGE.to_string(),
    }
}

/// Title shown next to the menu-bar icon. Empty in compact mode.
pub fn menu_bar_title(remaining: Option<&RemainingBreakdown>, options: DisplayOptions) -> String {
    if options.compact_mode {
        return String::new();
    }
    format!(" {}", format_or_elapsed(remaining, FormatStyle::Long))
}

/// Value/label pairs for the large per-unit display of the full-screen app.
pub fn app_units(breakdown: &RemainingBreakdown) -> [(u64, &'static str); 4] {
    [
        (breakdown.days, "DAYS"),
        (u64::from(breakdown.hours), "HRS"),
        (u64::from(breakdown.minutes), "MIN"),
        (u64::from(breakdown.seconds), "SEC"),
    ]
}

/// Text lines for one widget family, top to bottom.
pub fn widget_lines(
    family: WidgetFamily,
    event: &CountdownEvent,
    remaining: Option<&RemainingBreakdown>,
) -> Vec<String> {
    match family {
        WidgetFamily::Rectangular => vec![
            event.name.to_string(),
            format_or_elapsed(remaining, FormatStyle::Short),
        ],
        WidgetFamily::Circular => match remaining {
            Some(breakdown) => vec![breakdown.days.to_string(), "days".to_string()],
            None => vec![CIRCULAR_ELAPSED_SYMBOL.to_string()],
        },
        WidgetFamily::Inline => match remaining {
            Some(breakdown) => vec![format!(
                "{} in {}d {:02}h",
                event.short_name, breakdown.days, breakdown.hours
            )],
            None => vec![format!("{} is here!", event.short_name)],
        },
        WidgetFamily::Small => vec![
            format_or_elapsed(remaining, FormatStyle::Short),
            event.name.to_string(),
        ],
    }
}
