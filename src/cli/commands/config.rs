use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        init,
    } = cmd
    {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config {
            let rendered = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot render configuration: {e}")))?;
            println!("Current configuration:\n");
            println!("{rendered}");
        }

        if *init {
            Config::default().save()?;
            success(format!(
                "Default configuration written to {}",
                Config::config_file().display()
            ));
        }
    }

    Ok(())
}
