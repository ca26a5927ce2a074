use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Append a row to the working grid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { staff } = cmd {
        let mut pool = open_db(&cfg.database)?;

        let index = GridLogic::add_row(&mut pool, staff.as_deref())?;
        let grid = GridLogic::current(&mut pool)?;
        let entry = grid.row(index)?;

        success(format!("Row {} added for {}.", index + 1, entry.staff_name));
    }

    Ok(())
}
