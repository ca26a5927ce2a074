use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_db_with_week, rsg, setup_test_db, temp_out};

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&out).exists());

    // the copy is a usable database
    rsg()
        .args(["--db", &out, "list"])
        .assert()
        .success()
        .stdout(contains("10:00AM-3:00PM"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");
    let zip = temp_out("backup_zip", "zip");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}
