use crate::cli::commands::to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::list::row_summary;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::week::WEEKDAYS;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_day;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { row, day } = cmd {
        let index = to_index("row", *row)?;
        let day_index = parse_day(day)?;

        let mut pool = open_db(&cfg.database)?;

        let current = GridLogic::current(&mut pool)?;
        if current.row(index)?.slot(day_index)?.is_off() {
            info(format!(
                "Row {} has no shift on {}; nothing to clear.",
                row, WEEKDAYS[day_index]
            ));
            return Ok(());
        }

        let entry = GridLogic::clear_slot(&mut pool, index, day_index)?;

        success(row_summary(index, &entry));
    }

    Ok(())
}
