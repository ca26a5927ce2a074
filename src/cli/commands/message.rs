use crate::cli::commands::to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::message::staff_message;
use crate::core::schedule::current_week;
use crate::db::initialize::open_db;
use crate::errors::AppResult;

/// Print the weekly message for one row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Message { row } = cmd {
        let index = to_index("row", *row)?;
        let mut pool = open_db(&cfg.database)?;

        let week = current_week(&mut pool)?;
        let grid = GridLogic::current(&mut pool)?;

        print!("{}", staff_message(grid.row(index)?, &week));
    }

    Ok(())
}
