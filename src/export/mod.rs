// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One of the five summary tables, selectable with `--table`.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryKind {
    WeekdayHours,
    TaskTotals,
    WeekdayTaskMix,
    WeekdaySubteamMix,
    SubteamTasks,
}

impl SummaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKind::WeekdayHours => "weekday-hours",
            SummaryKind::TaskTotals => "task-totals",
            SummaryKind::WeekdayTaskMix => "weekday-task-mix",
            SummaryKind::WeekdaySubteamMix => "weekday-subteam-mix",
            SummaryKind::SubteamTasks => "subteam-tasks",
        }
    }
}
