//! Input loading: parse each CSV stream, concatenate everything into one
//! unified table, and check the required schema.

use crate::errors::{AppError, AppResult};
use crate::models::raw_table::{RawRow, RawTable};
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Columns every upload must provide (checked after header trimming,
/// case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Hours", "Description", "SubTeam"];

pub fn load_files(paths: &[PathBuf]) -> AppResult<RawTable> {
    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        inputs.push(File::open(path)?);
    }
    load_readers(inputs)
}

/// Parses and concatenates the given streams in order, without
/// deduplication. The unified column set is the union of the per-file
/// headers; the schema check runs against that union, so required columns
/// may be spread across files. Row-level validity is the normalizer's job.
pub fn load_readers<R: Read>(inputs: Vec<R>) -> AppResult<RawTable> {
    let mut table = RawTable::default();

    for input in inputs {
        append_stream(&mut table, input)?;
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| c.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingColumns(missing));
    }

    Ok(table)
}

fn append_stream<R: Read>(table: &mut RawTable, input: R) -> AppResult<()> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(input);

    let headers = rdr.headers()?.clone();

    for h in headers.iter() {
        if !h.is_empty() && !table.has_column(h) {
            table.columns.push(h.to_string());
        }
    }

    for record in rdr.records() {
        let record = record?;
        let mut fields = HashMap::new();
        for (i, h) in headers.iter().enumerate() {
            if h.is_empty() {
                continue;
            }
            if let Some(value) = record.get(i) {
                fields.insert(h.to_string(), value.to_string());
            }
        }
        table.rows.push(RawRow::new(fields));
    }

    Ok(())
}
