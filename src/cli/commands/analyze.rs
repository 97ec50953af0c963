use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::render_report;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { files, table } = cmd {
        // no uploads means a no-op run, not a fault
        if files.is_empty() {
            info("No input files supplied, nothing to analyze.");
            return Ok(());
        }

        let report = core::run_pipeline(files, cfg)?;
        render_report(&report, cfg, table.as_ref());
    }
    Ok(())
}
