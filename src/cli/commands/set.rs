use crate::cli::commands::to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::list::row_summary;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_day;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        row,
        day,
        start,
        end,
    } = cmd
    {
        //
        // 1. Parse input
        //
        let index = to_index("row", *row)?;
        let day_index = parse_day(day)?;
        let start = TimeOfDay::parse(start)?;
        let end = TimeOfDay::parse(end)?;

        //
        // 2. Apply to the working grid
        //
        let mut pool = open_db(&cfg.database)?;
        let entry = GridLogic::set_slot(&mut pool, index, day_index, start, end)?;

        if start == end {
            warning("Start equals end: the day is marked as not scheduled.");
        } else if end < start {
            warning("End is before start: this shift counts as 0 hours.");
        }

        success(row_summary(index, &entry));
    }

    Ok(())
}
