use chrono::NaiveDate;
use predicates::str::contains;
use rshiftgrid::core::week::resolve_week;
use rshiftgrid::export::render_html;
use rshiftgrid::models::{ScheduleEntry, TimeOfDay};
use std::fs;

mod common;
use common::{init_db_with_week, rsg, setup_test_db, temp_out};

fn sample_rows() -> Vec<ScheduleEntry> {
    let mut a = ScheduleEntry::create_row(Some("Staff A"));
    a.set_slot(
        0,
        TimeOfDay::parse("10:00AM").unwrap(),
        TimeOfDay::parse("3:00PM").unwrap(),
    )
    .unwrap();
    let b = ScheduleEntry::create_row(Some("<Lee & Park>"));
    vec![a, b]
}

#[test]
fn test_html_layout() {
    let week = resolve_week(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    let html = render_html(&sample_rows(), &week);

    assert!(html.contains("<title>Weekly Schedule</title>"));
    assert!(html.contains("Week of 01/05/2026 - 01/11/2026"));
    assert!(html.contains("Mon<br><span class=\"date-label\">1/5</span>"));
    assert!(html.contains("Sun<br><span class=\"date-label\">1/11</span>"));
    assert!(html.contains("<div style=\"margin-bottom:4px;\">10:00AM</div><div>3:00PM</div>"));
    assert!(html.contains("&lt;Lee &amp; Park&gt;"));
    // 6 days off for Staff A plus 7 for the second row
    assert_eq!(html.matches("<td></td>").count(), 13);
    assert!(!html.contains("5.0h"));
    assert!(!html.contains("<button"));
}

#[test]
fn test_export_html_file() {
    let db_path = setup_test_db("export_html");
    let out = temp_out("export_html", "html");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "export", "--format", "html", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("HTML export completed"));

    let content = fs::read_to_string(&out).expect("html file");
    assert!(content.contains("Week of 01/05/2026 - 01/11/2026"));
    assert!(content.contains("10:00AM"));
}

#[test]
fn test_export_json_file() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json file");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["week"], "Week of 01/05/2026 - 01/11/2026");
    assert_eq!(v["rows"][0]["staff"], "Staff A");
    assert_eq!(v["rows"][0]["times"][0]["end"], "3:00PM");
}

#[test]
fn test_export_csv_file() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_week(&db_path);

    rsg()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("staff,mon_start,mon_end"));
    assert!(lines.next().unwrap().starts_with("Staff A,10:00AM,3:00PM"));
}

#[test]
fn test_export_into_missing_directory_fails() {
    let db_path = setup_test_db("export_missing_dir");
    init_db_with_week(&db_path);

    let mut out = std::env::temp_dir();
    out.push("rshiftgrid_no_such_dir");
    out.push("schedule.html");
    let out = out.to_string_lossy().to_string();

    rsg()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .failure()
        .stderr(contains("Export error"));
}
