//! Emergency insertion and re-planning.
//!
//! A mid-day arrival triggers a full re-plan: the emergency is
//! prepended to the roster and the whole schedule is regenerated from
//! scratch. There is no incremental repair; determinism comes from the
//! engine, so rerunning an unchanged roster reproduces its schedule.
//! The outcome diffs the new optimized placement against the prior one
//! and flags the cases that slipped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Case, FullSchedule, Priority, ScheduleResult};
use crate::scheduler::greedy::TheaterScheduler;

/// A case pushed later by a re-plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DelayedCase {
    /// Case identifier.
    pub case_id: String,
    /// Start minute before the re-plan.
    pub previous_start_min: i64,
    /// Start minute after the re-plan.
    pub new_start_min: i64,
}

impl DelayedCase {
    /// How far the case slipped (minutes).
    #[inline]
    pub fn slip_min(&self) -> i64 {
        self.new_start_min - self.previous_start_min
    }
}

/// Result of an emergency insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplanOutcome {
    /// The roster that was scheduled: emergency first, then the prior
    /// cases in their submitted order.
    pub roster: Vec<Case>,
    /// The regenerated schedule.
    pub schedule: FullSchedule,
    /// Cases that slipped at least the delay threshold, in schedule
    /// order. Emergencies are never flagged.
    pub delayed: Vec<DelayedCase>,
}

impl TheaterScheduler {
    /// Inserts an emergency case and re-plans the whole day.
    ///
    /// The emergency is prepended to `roster`; under the standard
    /// sequencing policy its top priority puts it at the front of the
    /// operating list. `prior_optimized` is the optimized placement the
    /// day was running on; cases whose new start slips at least the
    /// configured threshold past their prior start are flagged, unless
    /// they are emergencies themselves. With no prior placement nothing
    /// is flagged.
    pub fn insert_emergency(
        &self,
        roster: &[Case],
        emergency: Case,
        prior_optimized: Option<&ScheduleResult>,
    ) -> ReplanOutcome {
        let mut next = Vec::with_capacity(roster.len() + 1);
        next.push(emergency);
        next.extend(roster.iter().cloned());

        let schedule = self.full_schedule(&next);
        let delayed = flag_delayed(
            prior_optimized,
            &schedule.optimized,
            self.config().delay_threshold_min,
        );

        info!(
            "re-planned {} cases after emergency {}; {} delayed",
            next.len(),
            next[0].id,
            delayed.len()
        );

        ReplanOutcome {
            roster: next,
            schedule,
            delayed,
        }
    }
}

/// Diffs a re-planned placement against the prior one.
fn flag_delayed(
    prior: Option<&ScheduleResult>,
    next: &ScheduleResult,
    threshold_min: i64,
) -> Vec<DelayedCase> {
    let prior = match prior {
        Some(result) => result,
        None => return Vec::new(),
    };

    let previous_starts: HashMap<&str, i64> = prior
        .cases
        .iter()
        .map(|c| (c.id.as_str(), c.start_min))
        .collect();

    next.cases
        .iter()
        .filter_map(|case| {
            let previous = *previous_starts.get(case.id.as_str())?;
            let slipped = case.start_min - previous >= threshold_min;
            if slipped && case.priority != Priority::Emergency {
                Some(DelayedCase {
                    case_id: case.id.clone(),
                    previous_start_min: previous,
                    new_start_min: case.start_min,
                })
            } else {
                None
            }
        })
        .collect()
}
