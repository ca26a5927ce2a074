#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsg() -> Command {
    cargo_bin_cmd!("rshiftgrid")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftgrid.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rsg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB, pin the current week to 2026-01-05 and give the first
/// row a Monday shift.
pub fn init_db_with_week(db_path: &str) {
    init_db(db_path);

    rsg()
        .args(["--db", db_path, "week", "2026-01-07"])
        .assert()
        .success();

    rsg()
        .args(["--db", db_path, "set", "1", "mon", "10:00AM", "3:00PM"])
        .assert()
        .success();
}
