use chrono::NaiveDate;

/// One (log row, task tag) pairing, produced by exploding `LogRow::tasks`.
/// A log row with zero tags contributes no event rows.
#[derive(Debug, Clone)]
pub struct TaskEventRow {
    pub date: NaiveDate,
    pub hours: f64,
    pub sub_team: String,
    pub weekday: &'static str,
    pub task: String,
}
