use crate::core::grid::commit;
use crate::core::persistence::ScheduleStore;
use crate::db::storage::Storage;
use crate::errors::AppResult;
use crate::models::staff::StaffDirectory;

pub struct StaffLogic;

impl StaffLogic {
    pub fn list<S: Storage + ?Sized>(storage: &mut S) -> AppResult<StaffDirectory> {
        ScheduleStore::new(storage).staff_directory()
    }

    /// Store `names` as the directory unless one is already stored.
    pub fn seed<S: Storage + ?Sized>(storage: &mut S, names: &[String]) -> AppResult<bool> {
        let mut store = ScheduleStore::new(storage);
        if store.has_staff_directory()? {
            return Ok(false);
        }

        let staff = if names.is_empty() {
            StaffDirectory::default()
        } else {
            StaffDirectory::from_names(names.iter().cloned())
        };
        store.save_staff_directory(&staff)?;
        Ok(true)
    }

    /// Add a name. Blank input is a silent no-op returning `false`.
    pub fn add<S: Storage + ?Sized>(storage: &mut S, name: &str) -> AppResult<bool> {
        let added = Self::update(storage, |staff| Ok(staff.add(name)))?;
        if added {
            storage.record("staff_add", name.trim(), "Added staff member")?;
        }
        Ok(added)
    }

    pub fn remove<S: Storage + ?Sized>(storage: &mut S, index: usize) -> AppResult<String> {
        let removed = Self::update(storage, |staff| staff.remove(index))?;
        storage.record("staff_del", &removed, "Removed staff member")?;
        Ok(removed)
    }

    /// Change the directory, then refresh every row's selection.
    fn update<S, T, F>(storage: &mut S, change: F) -> AppResult<T>
    where
        S: Storage + ?Sized,
        F: FnOnce(&mut StaffDirectory) -> AppResult<T>,
    {
        let mut store = ScheduleStore::new(storage);
        let mut staff = store.staff_directory()?;
        let out = change(&mut staff)?;
        store.save_staff_directory(&staff)?;

        let mut grid = store.working_grid(&staff)?;
        grid.refresh_staff(&staff);
        commit(&mut store, &grid)?;

        Ok(out)
    }
}
