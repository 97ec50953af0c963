//! Summary #2: total hours per task tag.

use crate::models::TaskEventRow;
use crate::models::report::{TaskTotal, TaskTotals};
use std::collections::BTreeMap;

pub fn task_totals(events: &[TaskEventRow]) -> TaskTotals {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for ev in events {
        *totals.entry(ev.task.as_str()).or_default() += ev.hours;
    }

    let rows = totals
        .into_iter()
        .map(|(task, hours)| TaskTotal {
            task: task.to_string(),
            hours,
        })
        .collect();

    TaskTotals { rows }
}
