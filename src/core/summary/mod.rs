//! The five summary computations. Each is a stateless pure function of the
//! normalized tables, so they can be tested in isolation and composed in
//! any order.

pub mod subteam_tasks;
pub mod task_totals;
pub mod weekday_hours;
pub mod weekday_subteam_mix;
pub mod weekday_task_mix;

use crate::core::normalizer::Normalized;
use crate::models::Report;
use crate::models::report::PercentPivot;
use crate::utils::date::order_present_weekdays;
use std::collections::{BTreeSet, HashMap};

pub fn build_report(data: &Normalized) -> Report {
    Report {
        weekday_hours: weekday_hours::weekday_hours(&data.log),
        task_totals: task_totals::task_totals(&data.events),
        weekday_task_mix: weekday_task_mix::weekday_task_mix(&data.events),
        weekday_subteam_mix: weekday_subteam_mix::weekday_subteam_mix(&data.log),
        subteam_tasks: subteam_tasks::subteam_tasks(&data.events),
    }
}

/// Shared weekday x category percent pivot.
///
/// Sums hours per (weekday, category), pivots with weekdays as rows in
/// canonical order and categories as sorted columns, then normalizes each
/// row to percentages. Missing combinations are 0. A weekday whose total
/// is exactly 0 becomes an all-zero row rather than NaN.
pub(crate) fn percent_pivot<I>(cells: I) -> PercentPivot
where
    I: IntoIterator<Item = (&'static str, String, f64)>,
{
    let mut sums: HashMap<&'static str, HashMap<String, f64>> = HashMap::new();
    for (weekday, category, hours) in cells {
        *sums.entry(weekday).or_default().entry(category).or_default() += hours;
    }

    if sums.is_empty() {
        return PercentPivot::default();
    }

    let rows = order_present_weekdays(sums.keys().copied());
    let columns: Vec<String> = sums
        .values()
        .flat_map(|per| per.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let values = rows
        .iter()
        .map(|weekday| {
            let per = &sums[weekday];
            let total: f64 = per.values().sum();
            columns
                .iter()
                .map(|c| {
                    let v = per.get(c).copied().unwrap_or(0.0);
                    if total == 0.0 { 0.0 } else { v / total * 100.0 }
                })
                .collect()
        })
        .collect();

    PercentPivot {
        rows,
        columns,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sum_to_hundred() {
        let pivot = percent_pivot(vec![
            ("Monday", "A".to_string(), 3.0),
            ("Monday", "B".to_string(), 1.0),
            ("Tuesday", "A".to_string(), 2.0),
        ]);

        assert_eq!(pivot.rows, vec!["Monday", "Tuesday"]);
        assert_eq!(pivot.columns, vec!["A".to_string(), "B".to_string()]);
        for row in &pivot.values {
            let sum: f64 = row.iter().sum();
            assert!((sum - 100.0).abs() < 1e-9);
        }
        assert!((pivot.values[0][0] - 75.0).abs() < 1e-9);
        assert!((pivot.values[1][1] - 0.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_weekday_becomes_all_zero_row() {
        let pivot = percent_pivot(vec![
            ("Monday", "A".to_string(), 0.0),
            ("Tuesday", "A".to_string(), 5.0),
        ]);

        let monday: f64 = pivot.values[0].iter().sum();
        assert_eq!(monday, 0.0);
        for v in &pivot.values[0] {
            assert!(v.is_finite());
        }
    }

    #[test]
    fn no_cells_yields_explicitly_empty_pivot() {
        let pivot = percent_pivot(Vec::new());
        assert!(pivot.is_empty());
    }
}
