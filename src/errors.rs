//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0} (expected a half-hour between 10:00AM and 9:30PM)")]
    InvalidTime(String),

    #[error("Invalid day: {0} (use mon..sun or 1..7)")]
    InvalidDay(String),

    #[error("Invalid week: {0}")]
    InvalidWeek(String),

    // ---------------------------
    // Grid errors
    // ---------------------------
    #[error("Invalid {what} index {index} (valid range: 0..{len})")]
    InvalidIndex {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid {what} number {position} (numbering starts at 1)")]
    InvalidPosition { what: &'static str, position: usize },

    #[error("At least one row must remain")]
    LastRow,

    #[error("Unknown staff member: {0}")]
    UnknownStaff(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn index(what: &'static str, index: usize, len: usize) -> Self {
        AppError::InvalidIndex { what, index, len }
    }
}

pub type AppResult<T> = Result<T, AppError>;
