//! Row normalization: coerce dates and hours, derive the weekday, extract
//! bracketed task tags, and explode rows into per-task events.
//!
//! Bad cells never raise; a row that fails either coercion is dropped
//! whole.

use crate::models::raw_table::RawTable;
use crate::models::{LogRow, TaskEventRow};
use crate::utils::date::{parse_date, weekday_name};
use regex::Regex;
use std::sync::OnceLock;

/// The two derived tables of one run.
#[derive(Debug, Default)]
pub struct Normalized {
    pub log: Vec<LogRow>,
    pub events: Vec<TaskEventRow>,
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]*)\]").expect("valid tag pattern"))
}

/// All bracket-delimited tags in a description, left to right,
/// non-overlapping. No brackets means an empty list.
pub fn extract_tasks(description: &str) -> Vec<String> {
    tag_regex()
        .captures_iter(description)
        .map(|c| c[1].to_string())
        .collect()
}

fn parse_hours(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

pub fn normalize(table: &RawTable, date_format: &str) -> Normalized {
    let mut log = Vec::new();
    let mut events = Vec::new();

    for row in &table.rows {
        let Some(date) = row.get("Date").and_then(|s| parse_date(s, date_format)) else {
            continue;
        };
        let Some(hours) = row.get("Hours").and_then(parse_hours) else {
            continue;
        };

        let description = row.get("Description").unwrap_or("").to_string();
        let sub_team = row.get("SubTeam").unwrap_or("").to_string();
        let weekday = weekday_name(date);
        let tasks = extract_tasks(&description);

        for task in &tasks {
            // empty tags like "[]" are dropped at explode time
            if task.is_empty() {
                continue;
            }
            events.push(TaskEventRow {
                date,
                hours,
                sub_team: sub_team.clone(),
                weekday,
                task: task.clone(),
            });
        }

        log.push(LogRow {
            date,
            hours,
            description,
            sub_team,
            weekday,
            tasks,
        });
    }

    Normalized { log, events }
}
