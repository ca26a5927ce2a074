use crate::errors::{AppError, AppResult};
use crate::models::entry::{ScheduleEntry, ScheduleSnapshot};
use crate::models::staff::{StaffDirectory, refresh_selection};

/// The live working grid. Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    rows: Vec<ScheduleEntry>,
}

impl TimeGrid {
    /// A fresh grid: one unscheduled row on the directory's default name.
    pub fn new(staff: &StaffDirectory) -> Self {
        Self {
            rows: vec![ScheduleEntry::create_row(staff.first())],
        }
    }

    /// Wrap a loaded snapshot. An empty snapshot still yields one row.
    pub fn from_snapshot(snapshot: ScheduleSnapshot, staff: &StaffDirectory) -> Self {
        if snapshot.is_empty() {
            Self::new(staff)
        } else {
            Self { rows: snapshot }
        }
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        self.rows.clone()
    }

    pub fn rows(&self) -> &[ScheduleEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> AppResult<&ScheduleEntry> {
        let len = self.rows.len();
        self.rows
            .get(index)
            .ok_or_else(|| AppError::index("row", index, len))
    }

    pub fn row_mut(&mut self, index: usize) -> AppResult<&mut ScheduleEntry> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or_else(|| AppError::index("row", index, len))
    }

    /// Append a row and return its index.
    pub fn add_row(&mut self, entry: ScheduleEntry) -> usize {
        self.rows.push(entry);
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> AppResult<ScheduleEntry> {
        if index >= self.rows.len() {
            return Err(AppError::index("row", index, self.rows.len()));
        }
        if self.rows.len() == 1 {
            return Err(AppError::LastRow);
        }
        Ok(self.rows.remove(index))
    }

    pub fn assign_staff(&mut self, index: usize, name: &str) -> AppResult<()> {
        self.row_mut(index)?.staff_name = name.to_string();
        Ok(())
    }

    /// Re-point every row at a name that still exists in `staff`.
    pub fn refresh_staff(&mut self, staff: &StaffDirectory) {
        for row in &mut self.rows {
            row.staff_name = refresh_selection(&row.staff_name, staff);
        }
    }
}
