use chrono::{Duration, NaiveDate};
use rshiftgrid::core::week::resolve_week;
use rshiftgrid::models::WeekKey;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_week_spanning_new_year() {
    let a = resolve_week(d(2025, 12, 31));
    let b = resolve_week(d(2026, 1, 4));

    assert_eq!(a, b);
    assert_eq!(a.to_string(), "Week of 12/29/2025 - 01/04/2026");
}

#[test]
fn test_every_day_of_a_week_gives_the_same_key() {
    let monday = d(2026, 1, 5);
    let expected = resolve_week(monday);

    for i in 0..7 {
        assert_eq!(resolve_week(monday + Duration::days(i)), expected);
    }

    assert_eq!(expected.to_string(), "Week of 01/05/2026 - 01/11/2026");
    assert_ne!(resolve_week(d(2026, 1, 12)), expected);
    assert_ne!(resolve_week(d(2026, 1, 4)), expected);
}

#[test]
fn test_sunday_belongs_to_previous_monday() {
    let week = resolve_week(d(2026, 3, 1));
    assert_eq!(week.monday(), d(2026, 2, 23));
    assert_eq!(week.sunday(), d(2026, 3, 1));
}

#[test]
fn test_week_across_month_boundary_in_leap_year() {
    let week = resolve_week(d(2028, 3, 2));
    assert_eq!(week.to_string(), "Week of 02/28/2028 - 03/05/2028");
    assert_eq!(
        week.header_labels(),
        ["2/28", "2/29", "3/1", "3/2", "3/3", "3/4", "3/5"].map(String::from)
    );
}

#[test]
fn test_week_key_parse() {
    let week = resolve_week(d(2026, 1, 7));
    let parsed = WeekKey::parse("Week of 01/05/2026 - 01/11/2026").unwrap();
    assert_eq!(parsed, week);

    // not a Monday
    assert!(WeekKey::parse("Week of 01/06/2026 - 01/12/2026").is_err());
    // wrong span
    assert!(WeekKey::parse("Week of 01/05/2026 - 01/10/2026").is_err());
    assert!(WeekKey::parse("01/05/2026 - 01/11/2026").is_err());
}
