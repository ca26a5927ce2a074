use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        if !*force && !ask_confirmation("Clear the whole grid? Unsaved shifts will be lost.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(&cfg.database)?;
        GridLogic::reset(&mut pool)?;
        success("Grid cleared: one empty row.");
    }

    Ok(())
}
