use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Number of decimals in printed hour/percent values
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Input date format tried before the built-in fallbacks
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Print a placeholder for summaries with no data instead of skipping them
    #[serde(default = "default_show_empty")]
    pub show_empty: bool,
}

fn default_decimals() -> usize {
    1
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_show_empty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            separator_char: default_separator_char(),
            date_format: default_date_format(),
            show_empty: default_show_empty(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("logsight")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".logsight")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("logsight.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported and replaced by defaults rather than
    /// aborting the run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Ignoring malformed configuration file '{}': {}",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Could not read configuration file '{}': {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Write the configuration to its standard location, creating the
    /// directory when needed.
    pub fn save(&self) -> std::io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let content = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        fs::write(Self::config_file(), content)
    }
}
