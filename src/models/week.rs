use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const KEY_PREFIX: &str = "Week of ";
const KEY_DATE_FMT: &str = "%m/%d/%Y";

/// A Monday-start week, displayed as `Week of MM/DD/YYYY - MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    monday: NaiveDate,
}

impl WeekKey {
    pub(crate) fn from_monday(monday: NaiveDate) -> Self {
        Self { monday }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }

    /// The seven dates Monday..Sunday.
    pub fn day_dates(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.monday + Duration::days(i as i64))
    }

    /// Column header labels (`1/5`), one per day.
    pub fn header_labels(&self) -> [String; 7] {
        self.day_dates()
            .map(|d| format!("{}/{}", d.month(), d.day()))
    }

    /// Parse the display form back into a key.
    pub fn parse(text: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidWeek(text.to_string());

        let range = text.trim().strip_prefix(KEY_PREFIX).ok_or_else(invalid)?;
        let (first, last) = range.split_once(" - ").ok_or_else(invalid)?;

        let monday = NaiveDate::parse_from_str(first.trim(), KEY_DATE_FMT).map_err(|_| invalid())?;
        let sunday = NaiveDate::parse_from_str(last.trim(), KEY_DATE_FMT).map_err(|_| invalid())?;

        if monday.weekday() != Weekday::Mon || sunday != monday + Duration::days(6) {
            return Err(invalid());
        }

        Ok(Self { monday })
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} - {}",
            KEY_PREFIX,
            self.monday.format(KEY_DATE_FMT),
            self.sunday().format(KEY_DATE_FMT)
        )
    }
}
