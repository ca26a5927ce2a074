use crate::errors::{AppError, AppResult};
use crate::models::week::WEEKDAYS;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD` or `today`.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Day column from `mon`..`sun` (any case, full names too) or `1`..`7`.
/// Returns the 0-based index, Monday = 0.
pub fn parse_day(s: &str) -> AppResult<usize> {
    let t = s.trim().to_ascii_lowercase();

    if let Ok(n) = t.parse::<usize>() {
        return match n {
            1..=7 => Ok(n - 1),
            _ => Err(AppError::InvalidDay(s.to_string())),
        };
    }

    if t.len() >= 3 {
        for (i, name) in WEEKDAYS.iter().enumerate() {
            let short = name.to_ascii_lowercase();
            if t.starts_with(&short) && full_name(i).starts_with(&t) {
                return Ok(i);
            }
        }
    }

    Err(AppError::InvalidDay(s.to_string()))
}

fn full_name(i: usize) -> &'static str {
    match i {
        0 => "monday",
        1 => "tuesday",
        2 => "wednesday",
        3 => "thursday",
        4 => "friday",
        5 => "saturday",
        _ => "sunday",
    }
}
