// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, SummaryKind};
use crate::models::Report;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the computed report to `file`.
    ///
    /// - `format`: "csv" | "json"
    /// - `table`: one of the five summaries; optional for JSON (the whole
    ///   report is written), required for CSV since a CSV file holds one
    ///   table.
    pub fn export(
        report: &Report,
        format: &ExportFormat,
        file: &str,
        table: Option<&SummaryKind>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(report, table, path),
            ExportFormat::Csv => {
                let Some(kind) = table else {
                    return Err(AppError::Export(
                        "CSV export writes one table per file, select one with --table".to_string(),
                    ));
                };
                export_csv(report, kind, path)
            }
        }
    }
}
