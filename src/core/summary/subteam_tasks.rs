//! Summary #5: task hour totals per sub-team.

use crate::models::TaskEventRow;
use crate::models::report::{SubTeamBreakdown, SubTeamTasks, TaskTotal};
use std::collections::BTreeMap;

pub fn subteam_tasks(events: &[TaskEventRow]) -> SubTeamTasks {
    let mut totals: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
    for ev in events {
        *totals
            .entry(ev.sub_team.as_str())
            .or_default()
            .entry(ev.task.as_str())
            .or_default() += ev.hours;
    }

    let teams = totals
        .into_iter()
        .map(|(sub_team, tasks)| SubTeamBreakdown {
            sub_team: sub_team.to_string(),
            tasks: tasks
                .into_iter()
                .map(|(task, hours)| TaskTotal {
                    task: task.to_string(),
                    hours,
                })
                .collect(),
        })
        .collect();

    SubTeamTasks { teams }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ev(sub_team: &str, task: &str, hours: f64) -> TaskEventRow {
        TaskEventRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            hours,
            sub_team: sub_team.to_string(),
            weekday: "Monday",
            task: task.to_string(),
        }
    }

    #[test]
    fn groups_tasks_under_their_sub_team() {
        let out = subteam_tasks(&[
            ev("Core", "Design", 4.0),
            ev("Infra", "Ops", 2.0),
            ev("Core", "Design", 1.0),
            ev("Core", "Build", 3.0),
        ]);

        assert_eq!(out.teams.len(), 2);
        let core = &out.teams[0];
        assert_eq!(core.sub_team, "Core");
        assert_eq!(core.tasks.len(), 2);
        assert_eq!(core.tasks[0].task, "Build");
        assert!((core.tasks[1].hours - 5.0).abs() < 1e-9);
    }

    #[test]
    fn no_events_yields_empty_summary() {
        assert!(subteam_tasks(&[]).is_empty());
    }
}
