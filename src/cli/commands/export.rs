use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::schedule::current_week;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::resolve_output;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = open_db(&cfg.database)?;

        let week = current_week(&mut pool)?;
        let grid = GridLogic::current(&mut pool)?;
        let path = resolve_output(format, file.as_deref(), &cfg.export_dir);

        ExportLogic::export(&mut pool, &grid, &week, format, &path, *force)?;
    }
    Ok(())
}
