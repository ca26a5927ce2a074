// src/export/model.rs

use crate::models::entry::ScheduleEntry;
use crate::models::week::{WEEKDAYS, WeekKey};
use serde::Serialize;

/// JSON export document.
#[derive(Serialize, Debug)]
pub(crate) struct ScheduleExport<'a> {
    pub week: String,
    pub monday: String,
    pub rows: &'a [ScheduleEntry],
}

impl<'a> ScheduleExport<'a> {
    pub fn new(week: &WeekKey, rows: &'a [ScheduleEntry]) -> Self {
        Self {
            week: week.to_string(),
            monday: week.monday().format("%Y-%m-%d").to_string(),
            rows,
        }
    }
}

/// CSV header: `staff, mon_start, mon_end, ..., sun_end`.
pub(crate) fn get_headers() -> Vec<String> {
    let mut headers = vec!["staff".to_string()];
    for day in WEEKDAYS {
        let d = day.to_ascii_lowercase();
        headers.push(format!("{d}_start"));
        headers.push(format!("{d}_end"));
    }
    headers
}

/// One CSV record; unscheduled days are two blank fields.
pub(crate) fn entry_to_row(e: &ScheduleEntry) -> Vec<String> {
    let mut row = vec![e.staff_name.clone()];
    for slot in &e.days {
        match slot.bounds() {
            Some((start, end)) => {
                row.push(start.label());
                row.push(end.label());
            }
            None => {
                row.push(String::new());
                row.push(String::new());
            }
        }
    }
    row
}
