use rshiftgrid::core::calculator::{format_total, grid_total_minutes, row_total_minutes, slot_minutes};
use rshiftgrid::errors::AppError;
use rshiftgrid::models::{DaySlot, ScheduleEntry, StaffDirectory, TimeGrid, TimeOfDay};

fn t(label: &str) -> TimeOfDay {
    TimeOfDay::parse(label).unwrap()
}

#[test]
fn test_time_labels_cover_the_half_hour_grid() {
    let labels: Vec<String> = TimeOfDay::grid().map(|t| t.label()).collect();

    assert_eq!(labels.len(), 24);
    assert_eq!(labels.first().unwrap(), "10:00AM");
    assert_eq!(labels[4], "12:00PM");
    assert_eq!(labels[5], "12:30PM");
    assert_eq!(labels.last().unwrap(), "9:30PM");
}

#[test]
fn test_time_parse_accepts_both_clock_styles() {
    assert_eq!(t("10:00AM").minutes(), 600);
    assert_eq!(t("12:00PM").minutes(), 720);
    assert_eq!(t("9:30PM").minutes(), 1290);
    assert_eq!(t("14:30").minutes(), 870);
    assert_eq!(t(" 3:00pm ").minutes(), 900);

    assert!(matches!(TimeOfDay::parse("9:00AM"), Err(AppError::InvalidTime(_))));
    assert!(matches!(TimeOfDay::parse("10:15AM"), Err(AppError::InvalidTime(_))));
    assert!(matches!(TimeOfDay::parse("10:00PM"), Err(AppError::InvalidTime(_))));
    assert!(matches!(TimeOfDay::parse("13:00PM"), Err(AppError::InvalidTime(_))));
    assert!(matches!(TimeOfDay::parse("noon"), Err(AppError::InvalidTime(_))));
}

#[test]
fn test_slot_duration() {
    assert_eq!(slot_minutes(&DaySlot::new(t("10:00AM"), t("12:00PM"))), 120);
    assert_eq!(slot_minutes(&DaySlot::new(t("10:00AM"), t("3:30PM"))), 330);
    // reversed ranges count as zero, no overnight wraparound
    assert_eq!(slot_minutes(&DaySlot::new(t("3:00PM"), t("10:00AM"))), 0);
    assert_eq!(slot_minutes(&DaySlot::Off), 0);
}

#[test]
fn test_equal_bounds_are_a_day_off() {
    let slot = DaySlot::new(t("2:00PM"), t("2:00PM"));
    assert!(slot.is_off());
    assert_eq!(slot.bounds(), None);
    assert_eq!(slot.selector_values(), (TimeOfDay::EARLIEST, TimeOfDay::EARLIEST));
}

#[test]
fn test_row_total_formatting() {
    let mut entry = ScheduleEntry::create_row(Some("Staff A"));
    assert!(entry.is_unscheduled());
    assert_eq!(row_total_minutes(&entry), 0);
    assert_eq!(format_total(row_total_minutes(&entry)), "");

    entry.set_slot(0, t("10:00AM"), t("12:00PM")).unwrap();
    assert_eq!(format_total(row_total_minutes(&entry)), "2.0h");

    entry.set_slot(2, t("1:00PM"), t("2:30PM")).unwrap();
    assert_eq!(format_total(row_total_minutes(&entry)), "3.5h");

    entry.clear_slot(0).unwrap();
    assert_eq!(format_total(row_total_minutes(&entry)), "1.5h");

    assert!(matches!(
        entry.set_slot(7, t("1:00PM"), t("2:30PM")),
        Err(AppError::InvalidIndex { .. })
    ));
}

#[test]
fn test_new_grid_starts_with_one_row_for_first_staff() {
    let grid = TimeGrid::new(&StaffDirectory::default());

    assert_eq!(grid.len(), 1);
    assert_eq!(grid.rows()[0].staff_name, "Staff A");
    assert!(grid.rows()[0].is_unscheduled());
    assert_eq!(grid_total_minutes(&grid), 0);
}

#[test]
fn test_last_row_cannot_be_removed() {
    let mut grid = TimeGrid::new(&StaffDirectory::default());
    grid.add_row(ScheduleEntry::create_row(Some("Staff B")));

    assert!(grid.remove_row(5).is_err());

    let removed = grid.remove_row(0).unwrap();
    assert_eq!(removed.staff_name, "Staff A");
    assert_eq!(grid.len(), 1);

    assert!(matches!(grid.remove_row(0), Err(AppError::LastRow)));
    assert_eq!(grid.len(), 1);
}

#[test]
fn test_refresh_staff_falls_back_to_first_name() {
    let mut staff = StaffDirectory::default();
    let mut grid = TimeGrid::new(&staff);
    grid.add_row(ScheduleEntry::create_row(Some("Staff B")));
    grid.add_row(ScheduleEntry::create_row(Some("Staff C")));

    staff.remove(1).unwrap();
    grid.refresh_staff(&staff);

    let names: Vec<&str> = grid.rows().iter().map(|r| r.staff_name.as_str()).collect();
    assert_eq!(names, ["Staff A", "Staff A", "Staff C"]);

    let empty = StaffDirectory::from_names(Vec::<String>::new());
    grid.refresh_staff(&empty);
    assert!(grid.rows().iter().all(|r| r.staff_name.is_empty()));
}

#[test]
fn test_staff_directory_ignores_blank_names() {
    let mut staff = StaffDirectory::default();
    assert!(!staff.add("   "));
    assert_eq!(staff.len(), 4);

    assert!(staff.add("  Kim  "));
    assert_eq!(staff.list().last().unwrap(), "Kim");

    assert!(staff.remove(10).is_err());
}

#[test]
fn test_entry_json_shape() {
    let mut entry = ScheduleEntry::create_row(Some("Staff A"));
    entry.set_slot(0, t("10:00AM"), t("3:00PM")).unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["staff"], "Staff A");
    assert_eq!(json["times"][0]["start"], "10:00AM");
    assert_eq!(json["times"][0]["end"], "3:00PM");
    // days off keep the selectors' default pair
    assert_eq!(json["times"][1]["start"], "10:00AM");
    assert_eq!(json["times"][1]["end"], "10:00AM");
    assert_eq!(json["times"].as_array().unwrap().len(), 7);
}
