use crate::core::persistence::ScheduleStore;
use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::entry::ScheduleEntry;
use crate::models::grid::TimeGrid;
use crate::models::layout::AutosaveLayout;
use crate::models::staff::StaffDirectory;
use crate::models::time_of_day::TimeOfDay;

/// Load the working grid, apply `edit`, write it back together with the
/// autosave layout.
pub(crate) fn with_grid<S, T, F>(storage: &mut S, edit: F) -> AppResult<T>
where
    S: Storage + ?Sized,
    F: FnOnce(&mut TimeGrid, &StaffDirectory) -> AppResult<T>,
{
    let mut store = ScheduleStore::new(storage);
    let staff = store.staff_directory()?;
    let mut grid = store.working_grid(&staff)?;

    let out = edit(&mut grid, &staff)?;

    commit(&mut store, &grid)?;
    Ok(out)
}

pub(crate) fn commit<S: Storage + ?Sized>(
    store: &mut ScheduleStore<'_, S>,
    grid: &TimeGrid,
) -> AppResult<()> {
    store.save_working_grid(grid)?;
    store.autosave(&AutosaveLayout::from_grid(grid))
}

pub struct GridLogic;

impl GridLogic {
    /// Current working grid, read-only.
    pub fn current<S: Storage + ?Sized>(storage: &mut S) -> AppResult<TimeGrid> {
        let mut store = ScheduleStore::new(storage);
        let staff = store.staff_directory()?;
        store.working_grid(&staff)
    }

    /// Append a row; without a name it takes the directory's first entry.
    pub fn add_row<S: Storage + ?Sized>(storage: &mut S, staff_name: Option<&str>) -> AppResult<usize> {
        with_grid(storage, |grid, staff| {
            let name = match staff_name {
                Some(n) if !staff.contains(n) => return Err(AppError::UnknownStaff(n.to_string())),
                Some(n) => Some(n),
                None => staff.first(),
            };
            Ok(grid.add_row(ScheduleEntry::create_row(name)))
        })
    }

    pub fn delete_row<S: Storage + ?Sized>(storage: &mut S, row: usize) -> AppResult<ScheduleEntry> {
        let removed = with_grid(storage, |grid, _| grid.remove_row(row))?;
        storage.record(
            "del",
            &format!("row {}", row + 1),
            &format!("Removed row for {}", removed.staff_name),
        )?;
        Ok(removed)
    }

    pub fn assign<S: Storage + ?Sized>(storage: &mut S, row: usize, name: &str) -> AppResult<()> {
        with_grid(storage, |grid, staff| {
            if !staff.contains(name) {
                return Err(AppError::UnknownStaff(name.to_string()));
            }
            grid.assign_staff(row, name)
        })
    }

    pub fn set_slot<S: Storage + ?Sized>(
        storage: &mut S,
        row: usize,
        day: usize,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> AppResult<ScheduleEntry> {
        with_grid(storage, |grid, _| {
            let entry = grid.row_mut(row)?;
            entry.set_slot(day, start, end)?;
            Ok(entry.clone())
        })
    }

    pub fn clear_slot<S: Storage + ?Sized>(storage: &mut S, row: usize, day: usize) -> AppResult<ScheduleEntry> {
        with_grid(storage, |grid, _| {
            let entry = grid.row_mut(row)?;
            entry.clear_slot(day)?;
            Ok(entry.clone())
        })
    }

    /// Start over with a single empty row.
    pub fn reset<S: Storage + ?Sized>(storage: &mut S) -> AppResult<()> {
        with_grid(storage, |grid, staff| {
            *grid = TimeGrid::new(staff);
            Ok(())
        })
    }

    /// Rebuild the working grid from the autosave layout: same rows and
    /// names, every slot reset. `None` when there is nothing to restore.
    pub fn restore<S: Storage + ?Sized>(storage: &mut S) -> AppResult<Option<TimeGrid>> {
        let mut store = ScheduleStore::new(storage);

        let Some(layout) = store.restore_autosave()? else {
            return Ok(None);
        };

        let staff = store.staff_directory()?;
        let grid = layout.to_grid(&staff);
        commit(&mut store, &grid)?;

        Ok(Some(grid))
    }
}
