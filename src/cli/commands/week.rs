use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{ScheduleLogic, current_week};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::week::{WEEKDAYS, WeekKey};
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;

fn print_days(week: &WeekKey) {
    let days: Vec<String> = WEEKDAYS
        .iter()
        .zip(week.header_labels())
        .map(|(name, label)| format!("{} {}", name, label))
        .collect();
    println!("   {}", days.join("  "));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let mut pool = open_db(&cfg.database)?;

        let week = match date {
            Some(d) => {
                let d = parse_date_arg(d)?;
                let week = ScheduleLogic::change_week(&mut pool, d)?;
                success(format!("Current week set to {}", week));
                week
            }
            None => {
                let week = current_week(&mut pool)?;
                println!("📅 {}", week);
                week
            }
        };

        print_days(&week);
    }

    Ok(())
}
