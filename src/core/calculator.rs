//! Worked-time computations for grid rows.

use crate::models::day_slot::DaySlot;
use crate::models::entry::ScheduleEntry;
use crate::models::grid::TimeGrid;

/// Minutes worked in one slot. Reversed ranges count as zero; there is no
/// overnight wraparound.
pub fn slot_minutes(slot: &DaySlot) -> i64 {
    match slot.bounds() {
        None => 0,
        Some((start, end)) => (end.minutes() as i64 - start.minutes() as i64).max(0),
    }
}

pub fn row_total_minutes(entry: &ScheduleEntry) -> i64 {
    entry.days.iter().map(slot_minutes).sum()
}

pub fn grid_total_minutes(grid: &TimeGrid) -> i64 {
    grid.rows().iter().map(row_total_minutes).sum()
}

/// Hours with one decimal (`"7.5h"`); zero renders as an empty string.
pub fn format_total(mins: i64) -> String {
    if mins == 0 {
        return String::new();
    }
    format!("{:.1}h", mins as f64 / 60.0)
}
