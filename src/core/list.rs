use crate::core::calculator::{format_total, grid_total_minutes, row_total_minutes};
use crate::models::day_slot::DaySlot;
use crate::models::entry::ScheduleEntry;
use crate::models::grid::TimeGrid;
use crate::models::week::{WEEKDAYS, WeekKey};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

const OFF_CELL: &str = "--";

/// Grid cell text: `10:00AM-3:00PM`, or `--` when unscheduled.
pub fn slot_cell(slot: &DaySlot) -> String {
    match slot.bounds() {
        Some((start, end)) => format!("{}-{}", start, end),
        None => OFF_CELL.to_string(),
    }
}

/// Text rendering of the grid: week title, one line per row with the
/// per-row total, and a grand total line.
pub fn render_grid(grid: &TimeGrid, week: &WeekKey, separator: char) -> String {
    let mut columns = vec![Column::right("#"), Column::left("Staff")];
    for (name, label) in WEEKDAYS.iter().zip(week.header_labels()) {
        columns.push(Column::left(format!("{} {}", name, label)));
    }
    columns.push(Column::right("Total"));

    let mut table = Table::new(columns);
    table.separator = separator;

    for (i, entry) in grid.rows().iter().enumerate() {
        let mut cells = vec![(i + 1).to_string(), entry.staff_name.clone()];
        cells.extend(entry.days.iter().map(slot_cell));
        cells.push(format_total(row_total_minutes(entry)));
        table.add_row(cells);
    }

    let mut out = format!("📅 {}\n\n", week);
    out.push_str(&table.render());

    let total = grid_total_minutes(grid);
    out.push_str(&format!(
        "\nRows: {}   Total: {} ({})\n",
        grid.len(),
        if total == 0 { "0h".to_string() } else { format_total(total) },
        format_minutes(total)
    ));

    out
}

/// One-line summary of a row: scheduled days and total.
pub fn row_summary(index: usize, entry: &ScheduleEntry) -> String {
    let days: Vec<String> = WEEKDAYS
        .iter()
        .zip(&entry.days)
        .filter(|(_, slot)| !slot.is_off())
        .map(|(name, slot)| format!("{} {}", name, slot_cell(slot)))
        .collect();

    let total = format_total(row_total_minutes(entry));

    format!(
        "Row {} ({}): {}{}",
        index + 1,
        entry.staff_name,
        if days.is_empty() { "no shifts".to_string() } else { days.join(", ") },
        if total.is_empty() { String::new() } else { format!(" → {}", total) }
    )
}
