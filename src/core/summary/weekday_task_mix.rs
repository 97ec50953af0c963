//! Summary #3: task percentage mix per weekday.

use crate::core::summary::percent_pivot;
use crate::models::TaskEventRow;
use crate::models::report::PercentPivot;

pub fn weekday_task_mix(events: &[TaskEventRow]) -> PercentPivot {
    percent_pivot(
        events
            .iter()
            .map(|ev| (ev.weekday, ev.task.clone(), ev.hours)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ev(weekday: &'static str, day: u32, task: &str, hours: f64) -> TaskEventRow {
        TaskEventRow {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            hours,
            sub_team: "Core".to_string(),
            weekday,
            task: task.to_string(),
        }
    }

    #[test]
    fn splits_each_weekday_into_task_percentages() {
        let out = weekday_task_mix(&[
            ev("Monday", 1, "Design", 3.0),
            ev("Monday", 1, "Build", 1.0),
            ev("Tuesday", 2, "Build", 6.0),
        ]);

        assert_eq!(out.rows, vec!["Monday", "Tuesday"]);
        assert_eq!(out.columns, vec!["Build".to_string(), "Design".to_string()]);
        assert!((out.values[0][1] - 75.0).abs() < 1e-9);
        assert!((out.values[1][0] - 100.0).abs() < 1e-9);
        // Tuesday logged no Design hours
        assert_eq!(out.values[1][1], 0.0);
    }

    #[test]
    fn no_task_events_yields_empty_pivot() {
        assert!(weekday_task_mix(&[]).is_empty());
    }
}
