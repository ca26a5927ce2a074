// src/export/logic.rs

use crate::db::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::grid::TimeGrid;
use crate::models::week::WeekKey;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::today;
use crate::utils::path::{expand_tilde, with_default_extension};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Default export name, after the export date: `Schedule_2026-01-05.html`.
pub fn default_file_name(format: &ExportFormat, date: NaiveDate) -> String {
    format!("Schedule_{}.{}", date.format("%Y-%m-%d"), format.as_str())
}

/// Output path: `file` when given, otherwise the default name in `export_dir`.
pub fn resolve_output(format: &ExportFormat, file: Option<&str>, export_dir: &str) -> PathBuf {
    match file {
        Some(f) => with_default_extension(&expand_tilde(f), format.as_str()),
        None => expand_tilde(export_dir).join(default_file_name(format, today())),
    }
}

/// Whether `path` may be written: it does not exist, `force` is set, or the
/// user confirms the overwrite.
fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    let ok = ask_confirmation(&format!("The file '{}' already exists. Overwrite?", path.display()));
    if ok {
        info("Existing file will be overwritten.");
    }
    Ok(ok)
}

/// High-level export of the working grid.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `grid` for `week` to `path`. Returns `false` when the user
    /// declined to overwrite an existing file.
    pub fn export<S: Storage + ?Sized>(
        storage: &mut S,
        grid: &TimeGrid,
        week: &WeekKey,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        if path.is_dir() {
            return Err(AppError::Export(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }

        if !ensure_writable(path, force)? {
            info("Export cancelled: existing file not overwritten.");
            return Ok(false);
        }

        match format {
            ExportFormat::Html => export_html(grid.rows(), week, path)?,
            ExportFormat::Json => export_json(grid.rows(), week, path)?,
            ExportFormat::Csv => export_csv(grid.rows(), path)?,
        }

        storage.record(
            "export",
            &path.to_string_lossy(),
            &format!("{} export of {}", format.as_str().to_uppercase(), week),
        )?;

        Ok(true)
    }
}
