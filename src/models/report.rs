//! Aggregate summary tables produced by `core::summary`.
//!
//! Each table may be explicitly empty; `is_empty()` is a first-class outcome
//! the presenter checks to decide between a table and a placeholder, it is
//! never an error.

use serde::Serialize;

/// Average daily hours for one weekday.
#[derive(Debug, Clone, Serialize)]
pub struct WeekdayAvg {
    pub weekday: &'static str,
    pub avg_hours: f64,
}

/// Summary #1: weekday -> average of daily hour totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WeekdayHours {
    pub rows: Vec<WeekdayAvg>,
}

impl WeekdayHours {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Total hours attributed to one task tag.
#[derive(Debug, Clone, Serialize)]
pub struct TaskTotal {
    pub task: String,
    pub hours: f64,
}

/// Summary #2: task tag -> total hours.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskTotals {
    pub rows: Vec<TaskTotal>,
}

impl TaskTotals {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.rows.iter().map(|r| r.hours).sum()
    }
}

/// Summaries #3 and #4: a weekday x category matrix of percentages.
/// `values[i][j]` is the percent of hours weekday `rows[i]` spent on
/// category `columns[j]`; each row sums to 100, or to 0 when that weekday
/// logged no hours at all.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PercentPivot {
    pub rows: Vec<&'static str>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl PercentPivot {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

/// Task hour totals for a single sub-team.
#[derive(Debug, Clone, Serialize)]
pub struct SubTeamBreakdown {
    pub sub_team: String,
    pub tasks: Vec<TaskTotal>,
}

/// Summary #5: sub-team -> task hour totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubTeamTasks {
    pub teams: Vec<SubTeamBreakdown>,
}

impl SubTeamTasks {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// The five aggregate tables of one analysis run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub weekday_hours: WeekdayHours,
    pub task_totals: TaskTotals,
    pub weekday_task_mix: PercentPivot,
    pub weekday_subteam_mix: PercentPivot,
    pub subteam_tasks: SubTeamTasks,
}
