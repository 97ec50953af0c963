//! Terminal presenter: one section per summary table, or an informational
//! placeholder when a summary came back empty.

use crate::config::Config;
use crate::export::SummaryKind;
use crate::models::Report;
use crate::models::report::PercentPivot;
use crate::ui::messages::info;
use crate::utils::fmt_number;
use crate::utils::formatting::{bold, section_rule};
use crate::utils::table::Table;

pub fn render_report(report: &Report, cfg: &Config, only: Option<&SummaryKind>) {
    let wants = |kind: SummaryKind| only.is_none() || only == Some(&kind);

    if wants(SummaryKind::WeekdayHours) {
        render_weekday_hours(report, cfg);
    }
    if wants(SummaryKind::TaskTotals) {
        render_task_totals(report, cfg);
    }
    if wants(SummaryKind::WeekdayTaskMix) {
        render_pivot(
            "Task Breakdown by Weekday (%)",
            &report.weekday_task_mix,
            "Not enough task data to break down by weekday.",
            cfg,
        );
    }
    if wants(SummaryKind::WeekdaySubteamMix) {
        render_pivot(
            "Time Spent on Sub-Teams by Weekday (%)",
            &report.weekday_subteam_mix,
            "Not enough sub-team data to display the daily mix.",
            cfg,
        );
    }
    if wants(SummaryKind::SubteamTasks) {
        render_subteam_tasks(report, cfg);
    }
}

fn heading(title: &str, cfg: &Config) {
    println!("{}", bold(title));
    println!("{}", section_rule(&cfg.separator_char, title.chars().count()));
}

fn placeholder(msg: &str, cfg: &Config) {
    if cfg.show_empty {
        info(msg);
        println!();
    }
}

fn render_weekday_hours(report: &Report, cfg: &Config) {
    let summary = &report.weekday_hours;
    if summary.is_empty() {
        placeholder("Not enough data to display average daily hours.", cfg);
        return;
    }

    heading("Average Daily Hours by Weekday", cfg);

    let mut table = Table::new(vec!["Weekday", "Avg Hours"]);
    for row in &summary.rows {
        table.add_row(vec![
            row.weekday.to_string(),
            fmt_number(row.avg_hours, cfg.decimals),
        ]);
    }
    println!("{}", table.render());
}

fn render_task_totals(report: &Report, cfg: &Config) {
    let summary = &report.task_totals;
    if summary.is_empty() {
        placeholder("Not enough task data to display task totals.", cfg);
        return;
    }

    heading("Time Spent by Task Type", cfg);

    let total = summary.total_hours();
    let mut table = Table::new(vec!["Task", "Hours", "Share %"]);
    for row in &summary.rows {
        let share = if total == 0.0 {
            0.0
        } else {
            row.hours / total * 100.0
        };
        table.add_row(vec![
            row.task.clone(),
            fmt_number(row.hours, cfg.decimals),
            fmt_number(share, cfg.decimals),
        ]);
    }
    println!("{}", table.render());
}

fn render_pivot(title: &str, pivot: &PercentPivot, empty_msg: &str, cfg: &Config) {
    if pivot.is_empty() {
        placeholder(empty_msg, cfg);
        return;
    }

    heading(title, cfg);

    let mut headers = vec!["Weekday".to_string()];
    headers.extend(pivot.columns.iter().cloned());

    let mut table = Table::new(headers);
    for (weekday, values) in pivot.rows.iter().zip(&pivot.values) {
        let mut row = vec![weekday.to_string()];
        row.extend(values.iter().map(|v| fmt_number(*v, cfg.decimals)));
        table.add_row(row);
    }
    println!("{}", table.render());
}

fn render_subteam_tasks(report: &Report, cfg: &Config) {
    let summary = &report.subteam_tasks;
    if summary.is_empty() {
        placeholder("Not enough sub-team task data to display breakdowns.", cfg);
        return;
    }

    heading("Task Breakdown per Sub-Team", cfg);

    for team in &summary.teams {
        let total: f64 = team.tasks.iter().map(|t| t.hours).sum();
        // a sub-team with zero logged task hours has nothing to show
        if total == 0.0 {
            continue;
        }

        println!("{}", bold(&team.sub_team));
        let mut table = Table::new(vec!["Task", "Hours", "Share %"]);
        for t in &team.tasks {
            table.add_row(vec![
                t.task.clone(),
                fmt_number(t.hours, cfg.decimals),
                fmt_number(t.hours / total * 100.0, cfg.decimals),
            ]);
        }
        println!("{}", table.render());
    }
}
