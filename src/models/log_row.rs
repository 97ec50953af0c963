use chrono::NaiveDate;

/// One normalized time-log entry.
/// Rows only exist here once both `date` and `hours` parsed successfully;
/// `weekday` and `tasks` are derived during normalization.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub sub_team: String,
    pub weekday: &'static str,
    pub tasks: Vec<String>,
}
