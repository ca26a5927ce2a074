pub mod day_slot;
pub mod entry;
pub mod grid;
pub mod layout;
pub mod staff;
pub mod time_of_day;
pub mod week;

pub use day_slot::DaySlot;
pub use entry::{DAYS_PER_WEEK, ScheduleEntry, ScheduleSnapshot};
pub use grid::TimeGrid;
pub use layout::{AutosaveLayout, LayoutRow};
pub use staff::StaffDirectory;
pub use time_of_day::TimeOfDay;
pub use week::{WEEKDAYS, WeekKey};
