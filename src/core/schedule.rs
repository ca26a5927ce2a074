use crate::core::grid::commit;
use crate::core::persistence::ScheduleStore;
use crate::core::week::resolve_week;
use crate::db::storage::Storage;
use crate::errors::AppResult;
use crate::models::grid::TimeGrid;
use crate::models::week::WeekKey;
use crate::utils::date::today;
use chrono::NaiveDate;

/// The week currently shown: the last selected date, or today.
pub fn current_anchor<S: Storage + ?Sized>(storage: &mut S) -> AppResult<NaiveDate> {
    let mut store = ScheduleStore::new(storage);
    Ok(store.last_selected_date()?.unwrap_or_else(today))
}

pub fn current_week<S: Storage + ?Sized>(storage: &mut S) -> AppResult<WeekKey> {
    Ok(resolve_week(current_anchor(storage)?))
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Switch the displayed week without touching the grid.
    pub fn change_week<S: Storage + ?Sized>(storage: &mut S, date: NaiveDate) -> AppResult<WeekKey> {
        ScheduleStore::new(storage).set_last_selected_date(date)?;
        Ok(resolve_week(date))
    }

    /// Save the working grid under the current week.
    pub fn save<S: Storage + ?Sized>(storage: &mut S) -> AppResult<(WeekKey, usize)> {
        let week = current_week(storage)?;

        let mut store = ScheduleStore::new(storage);
        let staff = store.staff_directory()?;
        let grid = store.working_grid(&staff)?;
        store.save(&week, grid.rows())?;

        storage.record(
            "save",
            &week.to_string(),
            &format!("Saved {} row(s)", grid.len()),
        )?;

        Ok((week, grid.len()))
    }

    /// Replace the working grid with the schedule saved for `date`'s week
    /// and make that week current. `None` leaves everything untouched.
    pub fn load<S: Storage + ?Sized>(
        storage: &mut S,
        date: NaiveDate,
    ) -> AppResult<Option<(WeekKey, TimeGrid)>> {
        let week = resolve_week(date);

        let mut store = ScheduleStore::new(storage);
        let Some(snapshot) = store.load(&week)? else {
            return Ok(None);
        };

        let staff = store.staff_directory()?;
        let grid = TimeGrid::from_snapshot(snapshot, &staff);
        commit(&mut store, &grid)?;
        store.set_last_selected_date(date)?;

        storage.record(
            "load",
            &week.to_string(),
            &format!("Loaded {} row(s)", grid.len()),
        )?;

        Ok(Some((week, grid)))
    }

    pub fn saved_weeks<S: Storage + ?Sized>(storage: &mut S) -> AppResult<Vec<WeekKey>> {
        ScheduleStore::new(storage).saved_weeks()
    }
}
