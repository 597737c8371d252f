use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::open_context;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ctx = open_context(cfg)?;
        ExportLogic::export(&ctx, *format, file, cfg.export_dir.as_deref(), *force)?;
    }
    Ok(())
}
