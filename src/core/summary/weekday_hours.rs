//! Summary #1: average daily hours per weekday.

use crate::models::LogRow;
use crate::models::report::{WeekdayAvg, WeekdayHours};
use crate::utils::date::{order_present_weekdays, weekday_name};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Sums hours per calendar date first, then averages those daily totals
/// per weekday. A weekday with no data is omitted, not zero-filled.
pub fn weekday_hours(log: &[LogRow]) -> WeekdayHours {
    let mut daily: HashMap<NaiveDate, f64> = HashMap::new();
    for row in log {
        *daily.entry(row.date).or_default() += row.hours;
    }

    let mut per_weekday: HashMap<&'static str, (f64, usize)> = HashMap::new();
    for (date, total) in &daily {
        let entry = per_weekday.entry(weekday_name(*date)).or_default();
        entry.0 += total;
        entry.1 += 1;
    }

    let rows = order_present_weekdays(per_weekday.keys().copied())
        .into_iter()
        .map(|weekday| {
            let (sum, count) = per_weekday[weekday];
            WeekdayAvg {
                weekday,
                avg_hours: sum / count as f64,
            }
        })
        .collect();

    WeekdayHours { rows }
}
