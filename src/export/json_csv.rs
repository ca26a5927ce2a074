// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ScheduleExport, entry_to_row, get_headers};
use crate::export::notify_export_success;
use crate::models::entry::ScheduleEntry;
use crate::models::week::WeekKey;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[ScheduleEntry], week: &WeekKey, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&ScheduleExport::new(week, rows))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one record per grid row.
pub(crate) fn export_csv(rows: &[ScheduleEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for entry in rows {
        wtr.write_record(entry_to_row(entry))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
