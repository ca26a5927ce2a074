use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::db::initialize::open_db;
use crate::db::storage::Storage;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore = cmd {
        let mut pool = open_db(&cfg.database)?;

        match GridLogic::restore(&mut pool)? {
            Some(grid) => {
                pool.record(
                    "restore",
                    "autosave_layout",
                    &format!("Rebuilt {} row(s)", grid.len()),
                )?;
                success(format!(
                    "Restored {} row(s) from the autosaved layout (times reset).",
                    grid.len()
                ));
            }
            None => info("Nothing to restore."),
        }
    }

    Ok(())
}
