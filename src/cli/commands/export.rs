use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        files,
        format,
        file,
        table,
        force,
    } = cmd
    {
        if files.is_empty() {
            info("No input files supplied, nothing to export.");
            return Ok(());
        }

        let report = core::run_pipeline(files, cfg)?;
        ExportLogic::export(&report, format, file, table.as_ref(), *force)?;
    }
    Ok(())
}
