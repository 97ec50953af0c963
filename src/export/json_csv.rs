// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{table_headers, table_rows};
use crate::export::{SummaryKind, notify_export_success};
use crate::models::Report;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: the whole report, or one table when
/// selected.
pub(crate) fn export_json(
    report: &Report,
    table: Option<&SummaryKind>,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = match table {
        None => serde_json::to_string_pretty(report),
        Some(SummaryKind::WeekdayHours) => serde_json::to_string_pretty(&report.weekday_hours),
        Some(SummaryKind::TaskTotals) => serde_json::to_string_pretty(&report.task_totals),
        Some(SummaryKind::WeekdayTaskMix) => {
            serde_json::to_string_pretty(&report.weekday_task_mix)
        }
        Some(SummaryKind::WeekdaySubteamMix) => {
            serde_json::to_string_pretty(&report.weekday_subteam_mix)
        }
        Some(SummaryKind::SubteamTasks) => serde_json::to_string_pretty(&report.subteam_tasks),
    }
    .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one summary table as CSV (header row included).
pub(crate) fn export_csv(report: &Report, table: &SummaryKind, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(table_headers(report, table))
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in table_rows(report, table) {
        wtr.write_record(&row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
