//! Time utilities: parsing `10:00AM` / `HH:MM` labels, formatting minutes.

use regex::Regex;
use std::sync::LazyLock;

static TIME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*([AaPp][Mm])?\s*$").unwrap()
});

/// Parse a clock label into minutes since midnight.
///
/// Accepts the 12-hour form used by the grid selectors (`10:00AM`, `12:30PM`)
/// and the 24-hour form (`14:30`). Returns `None` when the text is not a
/// valid time of day.
pub fn parse_time_label(t: &str) -> Option<u16> {
    let caps = TIME_LABEL.captures(t)?;

    let mut hour: u16 = caps[1].parse().ok()?;
    let minute: u16 = caps[2].parse().ok()?;

    if minute > 59 {
        return None;
    }

    match caps.get(3).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(ampm) => {
            if hour == 0 || hour > 12 {
                return None;
            }
            if ampm == "PM" && hour != 12 {
                hour += 12;
            }
            if ampm == "AM" && hour == 12 {
                hour = 0;
            }
        }
        None => {
            if hour > 23 {
                return None;
            }
        }
    }

    Some(hour * 60 + minute)
}

/// Format minutes since midnight as the 12-hour grid label (`9:30PM`).
pub fn format_time_label(mins: u16) -> String {
    let hour = mins / 60;
    let minute = mins % 60;

    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{:02}{}", display_hour, minute, ampm)
}

/// Format a duration as `HH:MM`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
