use crate::cli::commands::to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::staff::StaffLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { list, add, del } = cmd {
        let mut pool = open_db(&cfg.database)?;

        if let Some(name) = add
            && StaffLogic::add(&mut pool, name)?
        {
            success(format!("Added {}.", name.trim()));
        }

        if let Some(n) = del {
            let index = to_index("staff", *n)?;
            let removed = StaffLogic::remove(&mut pool, index)?;
            success(format!("Removed {}.", removed));
        }

        if *list || (add.is_none() && del.is_none()) {
            let staff = StaffLogic::list(&mut pool)?;
            if staff.is_empty() {
                info("The staff list is empty.");
            } else {
                println!("👥 Staff:\n");
                for (i, name) in staff.list().iter().enumerate() {
                    println!("{:>3}. {}", i + 1, name);
                }
            }
        }
    }

    Ok(())
}
