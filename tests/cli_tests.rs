use predicates::prelude::*;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_week, rsg, setup_test_db};

#[test]
fn test_init_seeds_staff_and_grid() {
    let db_path = setup_test_db("init_seeds");
    init_db(&db_path);

    rsg()
        .args(["--db", &db_path, "staff", "--list"])
        .assert()
        .success()
        .stdout(contains("Staff A").and(contains("Staff D")));

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Staff A").and(contains("Rows: 1")));
}

#[test]
fn test_save_reset_load_round_trip() {
    let db_path = setup_test_db("round_trip");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "save"])
        .assert()
        .success()
        .stdout(contains("Week of 01/05/2026 - 01/11/2026"));

    rsg()
        .args(["--db", &db_path, "reset", "--force"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("10:00AM-3:00PM").not());

    rsg()
        .args(["--db", &db_path, "load", "2026-01-07"])
        .assert()
        .success()
        .stdout(contains("10:00AM-3:00PM").and(contains("5.0h")));

    rsg()
        .args(["--db", &db_path, "list", "--saved"])
        .assert()
        .success()
        .stdout(contains("Week of 01/05/2026 - 01/11/2026"));
}

#[test]
fn test_load_unsaved_week_reports_nothing_found() {
    let db_path = setup_test_db("load_missing");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "load", "2031-03-12"])
        .assert()
        .success()
        .stdout(contains("No saved schedule found"));

    // working grid untouched
    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("10:00AM-3:00PM"));
}

#[test]
fn test_week_spanning_new_year() {
    let db_path = setup_test_db("week_new_year");
    init_db(&db_path);

    rsg()
        .args(["--db", &db_path, "week", "2025-12-31"])
        .assert()
        .success()
        .stdout(contains("Week of 12/29/2025 - 01/04/2026"));
}

#[test]
fn test_set_rejects_bad_input() {
    let db_path = setup_test_db("set_bad_input");
    init_db(&db_path);

    rsg()
        .args(["--db", &db_path, "set", "1", "8", "10:00AM", "3:00PM"])
        .assert()
        .failure()
        .stderr(contains("Invalid day"));

    rsg()
        .args(["--db", &db_path, "set", "1", "mon", "9:00AM", "3:00PM"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rsg()
        .args(["--db", &db_path, "set", "0", "mon", "10:00AM", "3:00PM"])
        .assert()
        .failure()
        .stderr(contains("numbering starts at 1"));

    rsg()
        .args(["--db", &db_path, "set", "4", "mon", "10:00AM", "3:00PM"])
        .assert()
        .failure()
        .stderr(contains("Invalid row index"));
}

#[test]
fn test_last_row_is_kept() {
    let db_path = setup_test_db("last_row");
    init_db(&db_path);

    rsg()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .failure()
        .stderr(contains("At least one row must remain"));

    rsg()
        .args(["--db", &db_path, "add", "--staff", "Staff B"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Staff B").and(contains("Rows: 1")));
}

#[test]
fn test_staff_changes_refresh_rows() {
    let db_path = setup_test_db("staff_refresh");
    init_db(&db_path);

    rsg()
        .args(["--db", &db_path, "staff", "--add", "   "])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "staff", "--add", "Kim"])
        .assert()
        .success()
        .stdout(contains("Added Kim."));

    rsg()
        .args(["--db", &db_path, "assign", "1", "Kim"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "assign", "1", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Unknown staff member"));

    rsg()
        .args(["--db", &db_path, "staff", "--del", "5"])
        .assert()
        .success()
        .stdout(contains("Removed Kim."));

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Staff A"));
}

#[test]
fn test_restore_keeps_rows_without_times() {
    let db_path = setup_test_db("restore");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "add", "--staff", "Staff C"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "restore"])
        .assert()
        .success()
        .stdout(contains("Restored 2 row(s)"));

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(
            contains("Staff C")
                .and(contains("Rows: 2"))
                .and(contains("10:00AM-3:00PM").not()),
        );
}

#[test]
fn test_message_for_row() {
    let db_path = setup_test_db("message");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "message", "1"])
        .assert()
        .success()
        .stdout(
            contains("[Staff A] Weekly Schedule")
                .and(contains("2026년 1월 5일 ~ 2026년 1월 11"))
                .and(contains("• 월(1/5): 10:00AM – 3:00PM")),
        );
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "save"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("save").and(contains("migration_applied")));
}

#[test]
fn test_clear_removes_a_shift() {
    let db_path = setup_test_db("clear_shift");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "clear", "1", "tue"])
        .assert()
        .success()
        .stdout(contains("nothing to clear"));

    rsg()
        .args(["--db", &db_path, "clear", "1", "mon"])
        .assert()
        .success()
        .stdout(contains("Row 1 (Staff A): no shifts"));

    rsg()
        .args(["--db", &db_path, "clear", "1", "sun"])
        .assert()
        .success()
        .stdout(contains("nothing to clear"));

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("10:00AM-3:00PM").not());
}

#[test]
fn test_reset_force_leaves_one_empty_row() {
    let db_path = setup_test_db("reset_force");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "add", "--staff", "Staff B"])
        .assert()
        .success();

    rsg()
        .args(["--db", &db_path, "reset", "--force"])
        .assert()
        .success()
        .stdout(contains("one empty row"));

    rsg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Rows: 1").and(contains("Staff B").not()));
}
