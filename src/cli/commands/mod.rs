pub mod add;
pub mod assign;
pub mod backup;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod load;
pub mod log;
pub mod message;
pub mod reset;
pub mod restore;
pub mod save;
pub mod set;
pub mod staff;
pub mod week;

use crate::errors::{AppError, AppResult};

/// 1-based number from the command line → 0-based index.
pub(crate) fn to_index(what: &'static str, position: usize) -> AppResult<usize> {
    position
        .checked_sub(1)
        .ok_or(AppError::InvalidPosition { what, position })
}
