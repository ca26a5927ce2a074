use crate::models::entry::ScheduleEntry;
use crate::models::grid::TimeGrid;
use crate::models::staff::StaffDirectory;
use serde::{Deserialize, Serialize};

/// Row identity only: which staff member sits on each row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub staff: String,
}

/// Lightweight snapshot used to rebuild the grid after an unexpected exit.
/// Times are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutosaveLayout {
    pub rows: Vec<LayoutRow>,
}

impl AutosaveLayout {
    pub fn from_grid(grid: &TimeGrid) -> Self {
        Self {
            rows: grid
                .rows()
                .iter()
                .map(|r| LayoutRow {
                    staff: r.staff_name.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a grid with the same rows and every slot reset.
    pub fn to_grid(&self, staff: &StaffDirectory) -> TimeGrid {
        let rows = self
            .rows
            .iter()
            .map(|r| ScheduleEntry::create_row(Some(&r.staff)))
            .collect();
        TimeGrid::from_snapshot(rows, staff)
    }
}
