mod engine;
pub mod formatter;

pub use engine::CountdownEngine;
pub use formatter::{
    format_long, format_or_elapsed, format_short, FormatStyle, WidgetFamily, ELAPSED_MESSAGE,
};
