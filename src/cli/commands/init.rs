use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::staff::StaffLogic;
use crate::db::initialize::open_db;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the staff list, seeded from `default_staff` when none is stored
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rShiftgrid…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = open_db(&db_path)?;

    if StaffLogic::seed(&mut pool, &cfg.default_staff)? {
        let staff = StaffLogic::list(&mut pool)?;
        info(format!("Staff list seeded with {} name(s).", staff.len()));
    }

    ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    success(format!("Database initialized at {}", &db_path));
    println!("🎉 rShiftgrid initialization completed!");
    Ok(())
}
