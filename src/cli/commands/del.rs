use crate::cli::commands::to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { row, force } = cmd {
        let index = to_index("row", *row)?;
        let mut pool = open_db(&cfg.database)?;

        // fail on a bad row before asking anything
        let grid = GridLogic::current(&mut pool)?;
        let entry = grid.row(index)?;

        if !*force
            && !ask_confirmation(&format!(
                "Delete row {} ({})? Its shifts will be lost.",
                row, entry.staff_name
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = GridLogic::delete_row(&mut pool, index)?;
        success(format!("Row {} ({}) has been deleted.", row, removed.staff_name));
    }

    Ok(())
}
