use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::render_grid;
use crate::core::schedule::ScheduleLogic;
use crate::core::week::resolve_week;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date_arg;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { date } = cmd {
        let d = parse_date_arg(date)?;
        let mut pool = open_db(&cfg.database)?;

        match ScheduleLogic::load(&mut pool, d)? {
            Some((week, grid)) => {
                success(format!("Loaded {}", week));
                print!("{}", render_grid(&grid, &week, cfg.separator()));
            }
            None => {
                info(format!(
                    "No saved schedule found for this week ({}).",
                    resolve_week(d)
                ));
            }
        }
    }

    Ok(())
}
