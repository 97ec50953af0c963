// src/export/model.rs

use crate::export::SummaryKind;
use crate::models::Report;

/// CSV header row for one summary table. Pivot headers depend on the data,
/// so this takes the report rather than being a constant.
pub(crate) fn table_headers(report: &Report, kind: &SummaryKind) -> Vec<String> {
    match kind {
        SummaryKind::WeekdayHours => vec!["weekday".to_string(), "avg_hours".to_string()],
        SummaryKind::TaskTotals => vec!["task".to_string(), "total_hours".to_string()],
        SummaryKind::WeekdayTaskMix => pivot_headers(&report.weekday_task_mix.columns),
        SummaryKind::WeekdaySubteamMix => pivot_headers(&report.weekday_subteam_mix.columns),
        SummaryKind::SubteamTasks => vec![
            "sub_team".to_string(),
            "task".to_string(),
            "total_hours".to_string(),
        ],
    }
}

fn pivot_headers(columns: &[String]) -> Vec<String> {
    let mut out = vec!["weekday".to_string()];
    out.extend(columns.iter().cloned());
    out
}

/// Flattens one summary table into CSV rows.
pub(crate) fn table_rows(report: &Report, kind: &SummaryKind) -> Vec<Vec<String>> {
    match kind {
        SummaryKind::WeekdayHours => report
            .weekday_hours
            .rows
            .iter()
            .map(|r| vec![r.weekday.to_string(), r.avg_hours.to_string()])
            .collect(),
        SummaryKind::TaskTotals => report
            .task_totals
            .rows
            .iter()
            .map(|r| vec![r.task.clone(), r.hours.to_string()])
            .collect(),
        SummaryKind::WeekdayTaskMix => pivot_rows(&report.weekday_task_mix),
        SummaryKind::WeekdaySubteamMix => pivot_rows(&report.weekday_subteam_mix),
        SummaryKind::SubteamTasks => {
            let mut rows = Vec::new();
            for team in &report.subteam_tasks.teams {
                for t in &team.tasks {
                    rows.push(vec![team.sub_team.clone(), t.task.clone(), t.hours.to_string()]);
                }
            }
            rows
        }
    }
}

fn pivot_rows(pivot: &crate::models::report::PercentPivot) -> Vec<Vec<String>> {
    pivot
        .rows
        .iter()
        .zip(&pivot.values)
        .map(|(weekday, values)| {
            let mut row = vec![weekday.to_string()];
            row.extend(values.iter().map(|v| v.to_string()));
            row
        })
        .collect()
}
