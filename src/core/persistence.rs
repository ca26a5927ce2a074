//! Persistence of schedules, layout and preferences on top of [`Storage`].
//!
//! Key layout:
//! - `savedSchedule_{WeekKey}` → `[{staff, times:[{start,end}×7]}]`
//! - `autosave_layout`         → `[{staff}]`
//! - `staffList`               → `["name", ...]`
//! - `last_selected_date`      → `YYYY-MM-DD`
//! - `working_grid`            → same shape as a saved schedule
//!
//! Unreadable payloads never reach the caller as errors: they are recorded
//! in the storage log as `corrupt_data`, removed, and reported as missing.

use crate::db::storage::Storage;
use crate::errors::AppResult;
use crate::models::entry::{ScheduleEntry, ScheduleSnapshot};
use crate::models::grid::TimeGrid;
use crate::models::layout::AutosaveLayout;
use crate::models::staff::StaffDirectory;
use crate::models::week::WeekKey;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const SCHEDULE_PREFIX: &str = "savedSchedule_";
pub const AUTOSAVE_KEY: &str = "autosave_layout";
pub const STAFF_KEY: &str = "staffList";
pub const LAST_DATE_KEY: &str = "last_selected_date";
pub const WORKING_GRID_KEY: &str = "working_grid";

pub struct ScheduleStore<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

pub fn schedule_key(week: &WeekKey) -> String {
    format!("{SCHEDULE_PREFIX}{week}")
}

impl<'a, S: Storage + ?Sized> ScheduleStore<'a, S> {
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    // ---------------------------
    // Weekly schedules
    // ---------------------------

    /// Store the snapshot for `week`, replacing whatever was there.
    pub fn save(&mut self, week: &WeekKey, snapshot: &[ScheduleEntry]) -> AppResult<()> {
        self.write_json(&schedule_key(week), snapshot)
    }

    /// `None` when nothing (readable) is stored for `week`.
    pub fn load(&mut self, week: &WeekKey) -> AppResult<Option<ScheduleSnapshot>> {
        self.read_json(&schedule_key(week))
    }

    /// Weeks with a stored schedule, oldest first.
    pub fn saved_weeks(&self) -> AppResult<Vec<WeekKey>> {
        let mut weeks: Vec<WeekKey> = self
            .storage
            .keys()?
            .iter()
            .filter_map(|k| k.strip_prefix(SCHEDULE_PREFIX))
            .filter_map(|k| WeekKey::parse(k).ok())
            .collect();
        weeks.sort();
        Ok(weeks)
    }

    // ---------------------------
    // Autosave layout
    // ---------------------------

    pub fn autosave(&mut self, layout: &AutosaveLayout) -> AppResult<()> {
        self.write_json(AUTOSAVE_KEY, layout)
    }

    pub fn restore_autosave(&mut self) -> AppResult<Option<AutosaveLayout>> {
        match self.storage.get(AUTOSAVE_KEY)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(_) => self.read_json(AUTOSAVE_KEY),
            None => Ok(None),
        }
    }

    // ---------------------------
    // Staff directory
    // ---------------------------

    /// The stored directory, or the default names when none is stored.
    pub fn staff_directory(&mut self) -> AppResult<StaffDirectory> {
        Ok(self.read_json(STAFF_KEY)?.unwrap_or_default())
    }

    pub fn save_staff_directory(&mut self, staff: &StaffDirectory) -> AppResult<()> {
        self.write_json(STAFF_KEY, staff)
    }

    pub fn has_staff_directory(&self) -> AppResult<bool> {
        Ok(self.storage.get(STAFF_KEY)?.is_some())
    }

    // ---------------------------
    // Current week anchor
    // ---------------------------

    pub fn last_selected_date(&mut self) -> AppResult<Option<NaiveDate>> {
        let Some(raw) = self.storage.get(LAST_DATE_KEY)? else {
            return Ok(None);
        };

        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(d) => Ok(Some(d)),
            Err(e) => {
                self.report_corrupt(LAST_DATE_KEY, &e.to_string())?;
                Ok(None)
            }
        }
    }

    pub fn set_last_selected_date(&mut self, date: NaiveDate) -> AppResult<()> {
        self.storage
            .set(LAST_DATE_KEY, &date.format("%Y-%m-%d").to_string())
    }

    // ---------------------------
    // Working grid
    // ---------------------------

    /// The live grid; a single default row when nothing is stored.
    pub fn working_grid(&mut self, staff: &StaffDirectory) -> AppResult<TimeGrid> {
        let snapshot: Option<ScheduleSnapshot> = self.read_json(WORKING_GRID_KEY)?;
        Ok(match snapshot {
            Some(rows) => TimeGrid::from_snapshot(rows, staff),
            None => TimeGrid::new(staff),
        })
    }

    pub fn save_working_grid(&mut self, grid: &TimeGrid) -> AppResult<()> {
        self.write_json(WORKING_GRID_KEY, grid.rows())
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)
    }

    fn read_json<T: DeserializeOwned>(&mut self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                self.report_corrupt(key, &e.to_string())?;
                Ok(None)
            }
        }
    }

    fn report_corrupt(&mut self, key: &str, reason: &str) -> AppResult<()> {
        warning(format!("Discarding unreadable data stored under '{}': {}", key, reason));
        self.storage.record("corrupt_data", key, reason)?;
        self.storage.delete(key)
    }
}
