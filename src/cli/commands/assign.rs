use crate::cli::commands::to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign { row, staff } = cmd {
        let index = to_index("row", *row)?;
        let mut pool = open_db(&cfg.database)?;

        GridLogic::assign(&mut pool, index, staff)?;
        success(format!("Row {} assigned to {}.", row, staff));
    }

    Ok(())
}
