use rshiftgrid::core::persistence::ScheduleStore;
use rshiftgrid::core::week::resolve_week;
use rshiftgrid::db::initialize::open_db;
use rshiftgrid::db::{MemoryStorage, Storage};
use rshiftgrid::models::ScheduleEntry;

mod common;
use common::setup_test_db;

fn exercise(storage: &mut dyn Storage) {
    assert_eq!(storage.get("staffList").unwrap(), None);

    storage.set("staffList", "[\"A\"]").unwrap();
    storage.set("autosave_layout", "[]").unwrap();
    storage.set("staffList", "[\"B\"]").unwrap();

    assert_eq!(storage.get("staffList").unwrap().as_deref(), Some("[\"B\"]"));
    assert_eq!(storage.keys().unwrap(), ["autosave_layout", "staffList"]);

    storage.delete("staffList").unwrap();
    storage.delete("missing").unwrap();
    assert_eq!(storage.get("staffList").unwrap(), None);
    assert_eq!(storage.keys().unwrap(), ["autosave_layout"]);
}

#[test]
fn test_memory_storage_basics() {
    let mut storage = MemoryStorage::new();
    exercise(&mut storage);

    storage.record("save", "week", "saved").unwrap();
    assert_eq!(storage.log().len(), 1);
    assert_eq!(storage.log()[0].operation, "save");
}

#[test]
fn test_sqlite_storage_basics() {
    let db_path = setup_test_db("storage_basics");
    let mut pool = open_db(&db_path).unwrap();
    exercise(&mut pool);
}

#[test]
fn test_sqlite_schedule_survives_reopen() {
    let db_path = setup_test_db("storage_reopen");
    let week = resolve_week(chrono::NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());

    {
        let mut pool = open_db(&db_path).unwrap();
        let rows = vec![ScheduleEntry::create_row(Some("Staff B"))];
        ScheduleStore::new(&mut pool).save(&week, &rows).unwrap();
    }

    let mut pool = open_db(&db_path).unwrap();
    let mut store = ScheduleStore::new(&mut pool);
    let loaded = store.load(&week).unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].staff_name, "Staff B");
    assert_eq!(store.saved_weeks().unwrap(), [week]);
}

#[test]
fn test_kv_schema_has_only_key_and_value() {
    let db_path = setup_test_db("storage_schema");
    let pool = open_db(&db_path).unwrap();

    let mut stmt = pool.conn.prepare("SELECT name FROM pragma_table_info('kv')").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|c| c.unwrap())
        .collect();
    assert_eq!(columns, ["key", "value"]);

    let mut stmt = pool
        .conn
        .prepare("SELECT target FROM log WHERE operation = 'migration_applied'")
        .unwrap();
    let applied: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|c| c.unwrap())
        .collect();
    assert_eq!(applied, ["20260105_0001_create_kv"]);
}
