use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save = cmd {
        let mut pool = open_db(&cfg.database)?;

        let (week, rows) = ScheduleLogic::save(&mut pool)?;
        success(format!("Schedule saved! {} ({} row(s))", week, rows));
    }

    Ok(())
}
