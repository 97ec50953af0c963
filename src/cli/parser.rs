use crate::export::{ExportFormat, SummaryKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for logsight
/// CLI application to analyze CSV time logs
#[derive(Parser)]
#[command(
    name = "logsight",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze CSV time logs: average hours by weekday, task and sub-team breakdowns",
    long_about = None
)]
pub struct Cli {
    /// Override the configured number of decimals in printed values
    #[arg(global = true, long = "decimals")]
    pub decimals: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more log files and print the summary tables
    Analyze {
        /// CSV log files (columns: Date, Hours, Description, SubTeam)
        files: Vec<PathBuf>,

        /// Print a single summary instead of all five
        #[arg(long = "table", help = "Summary to print (default: all)")]
        table: Option<SummaryKind>,
    },

    /// Analyze log files and export the summaries to CSV or JSON
    Export {
        /// CSV log files (columns: Date, Hours, Description, SubTeam)
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long = "format", help = "Output format: csv or json")]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "file", help = "Output file path")]
        file: String,

        /// Summary to export (required for csv, optional for json)
        #[arg(
            long = "table",
            help = "Summary to export (csv exports exactly one table)"
        )]
        table: Option<SummaryKind>,

        /// Overwrite the output file without asking
        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "init", help = "Write a configuration file with defaults")]
        init: bool,
    },
}
