use crate::errors::{AppError, AppResult};
use crate::models::day_slot::DaySlot;
use crate::models::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

/// One staff member's week, Monday..Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "staff")]
    pub staff_name: String,
    #[serde(rename = "times")]
    pub days: [DaySlot; DAYS_PER_WEEK],
}

/// The whole grid at one point in time, row order preserved.
pub type ScheduleSnapshot = Vec<ScheduleEntry>;

impl ScheduleEntry {
    /// A row with every day unscheduled.
    pub fn create_row(staff_name: Option<&str>) -> Self {
        Self {
            staff_name: staff_name.unwrap_or_default().to_string(),
            days: [DaySlot::Off; DAYS_PER_WEEK],
        }
    }

    /// Set one day. Input times are trusted to be grid values already.
    pub fn set_slot(&mut self, day_index: usize, start: TimeOfDay, end: TimeOfDay) -> AppResult<()> {
        *self.slot_mut(day_index)? = DaySlot::new(start, end);
        Ok(())
    }

    pub fn clear_slot(&mut self, day_index: usize) -> AppResult<()> {
        *self.slot_mut(day_index)? = DaySlot::Off;
        Ok(())
    }

    pub fn slot(&self, day_index: usize) -> AppResult<&DaySlot> {
        self.days
            .get(day_index)
            .ok_or_else(|| AppError::index("day", day_index, DAYS_PER_WEEK))
    }

    fn slot_mut(&mut self, day_index: usize) -> AppResult<&mut DaySlot> {
        self.days
            .get_mut(day_index)
            .ok_or_else(|| AppError::index("day", day_index, DAYS_PER_WEEK))
    }

    pub fn is_unscheduled(&self) -> bool {
        self.days.iter().all(DaySlot::is_off)
    }
}
