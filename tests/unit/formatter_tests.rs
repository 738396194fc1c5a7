// Table-driven tests for the display templates
// Each case pins one breakdown to its exact rendering

use demo_day_countdown::models::event::DEMO_DAY;
use demo_day_countdown::models::settings::DisplayOptions;
use demo_day_countdown::services::countdown::formatter::{menu_bar_title, widget_lines};
use demo_day_countdown::services::countdown::{format_long, format_short, WidgetFamily};
use demo_day_countdown::RemainingBreakdown;
use test_case::test_case;

fn breakdown(days: u64, hours: u8, minutes: u8, seconds: u8) -> RemainingBreakdown {
    RemainingBreakdown {
        days,
        hours,
        minutes,
        seconds,
    }
}

#[test_case(breakdown(2, 11, 29, 15), "2d 11h 29m 15s" ; "documented example")]
#[test_case(breakdown(0, 0, 0, 0), "0d 00h 00m 00s" ; "all zero")]
#[test_case(breakdown(0, 0, 0, 1), "0d 00h 00m 01s" ; "last second")]
#[test_case(breakdown(365, 23, 59, 59), "365d 23h 59m 59s" ; "upper field bounds")]
#[test_case(breakdown(10_000, 5, 6, 7), "10000d 05h 06m 07s" ; "days are unpadded")]
fn test_long_form(input: RemainingBreakdown, expected: &str) {
    assert_eq!(format_long(&input), expected);
}

#[test_case(breakdown(2, 11, 29, 15), "2d 11h 29m" ; "documented example")]
#[test_case(breakdown(0, 0, 0, 59), "0d 00h 00m" ; "seconds are dropped")]
#[test_case(breakdown(7, 9, 5, 0), "7d 09h 05m" ; "single digit padding")]
fn test_short_form(input: RemainingBreakdown, expected: &str) {
    assert_eq!(format_short(&input), expected);
}

#[test_case(WidgetFamily::Rectangular, &["YC Demo Day", "0d 03h 04m"] ; "rectangular")]
#[test_case(WidgetFamily::Circular, &["0", "days"] ; "circular")]
#[test_case(WidgetFamily::Inline, &["Demo Day in 0d 03h"] ; "inline")]
#[test_case(WidgetFamily::Small, &["0d 03h 04m", "YC Demo Day"] ; "small")]
fn test_widget_family_lines(family: WidgetFamily, expected: &[&str]) {
    let lines = widget_lines(family, &DEMO_DAY, Some(&breakdown(0, 3, 4, 5)));
    assert_eq!(lines, expected);
}

#[test_case(false, " 0d 03h 04m 05s" ; "full title")]
#[test_case(true, "" ; "compact hides title")]
fn test_menu_bar_title(compact_mode: bool, expected: &str) {
    let options = DisplayOptions { compact_mode };
    assert_eq!(menu_bar_title(Some(&breakdown(0, 3, 4, 5)), options), expected);
}

#[test]
fn test_formatting_is_repeatable() {
    let input = breakdown(1, 2, 3, 4);
    let first = (format_long(&input), format_short(&input));
    let second = (format_long(&input), format_short(&input));
    assert_eq!(first, second);
}
