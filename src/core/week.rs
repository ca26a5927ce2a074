//! Week resolution: any date → its Monday–Sunday key.

use crate::models::week::WeekKey;
use chrono::{Datelike, Duration, NaiveDate};

/// Resolve the Monday-start week containing `date`.
///
/// Sunday belongs to the week that started six days earlier.
pub fn resolve_week(date: NaiveDate) -> WeekKey {
    let day = date.weekday().num_days_from_sunday() as i64;
    let offset = if day == 0 { -6 } else { 1 - day };

    WeekKey::from_monday(date + Duration::days(offset))
}
