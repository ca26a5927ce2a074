use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::list::render_grid;
use crate::core::schedule::{ScheduleLogic, current_week};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { saved } = cmd {
        let mut pool = open_db(&cfg.database)?;

        if *saved {
            let weeks = ScheduleLogic::saved_weeks(&mut pool)?;
            if weeks.is_empty() {
                info("No saved schedules.");
                return Ok(());
            }

            println!("💾 Saved schedules:\n");
            for w in weeks {
                println!("   {}  (load {})", w, w.monday().format("%Y-%m-%d"));
            }
            return Ok(());
        }

        let week = current_week(&mut pool)?;
        let grid = GridLogic::current(&mut pool)?;

        print!("{}", render_grid(&grid, &week, cfg.separator()));
    }

    Ok(())
}
