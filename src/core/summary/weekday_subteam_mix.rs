//! Summary #4: sub-team percentage mix per weekday.

use crate::core::summary::percent_pivot;
use crate::models::LogRow;
use crate::models::report::PercentPivot;

/// Computed from the log table, not the exploded one, so rows without any
/// task tag still count toward their sub-team.
pub fn weekday_subteam_mix(log: &[LogRow]) -> PercentPivot {
    percent_pivot(
        log.iter()
            .map(|row| (row.weekday, row.sub_team.clone(), row.hours)),
    )
}
