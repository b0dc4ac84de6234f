//! Greedy priority-rule solver.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::Solver;
use crate::deadline::Deadline;
use crate::dispatching::{dispatch, PriorityRule};
use crate::error::Result;
use crate::models::Instance;
use crate::result::{ExitCause, SearchStatistics, SolveOutcome};
use crate::simulation::simulate;

/// Builds one schedule with a priority rule and stops.
///
/// Dispatching is a single pass, so the deadline is not consulted. The exit
/// cause is always [`ExitCause::Blocked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GreedySolver {
    /// Priority rule used to pick among dispatchable operations.
    pub rule: PriorityRule,
}

impl GreedySolver {
    /// Creates a greedy solver for `rule`.
    pub fn new(rule: PriorityRule) -> Self {
        Self { rule }
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> String {
        self.rule.to_string()
    }

    #[tracing::instrument(level = "debug", name = "Greedy", skip_all, fields(rule = %self.rule))]
    fn solve<'a>(&self, instance: &'a Instance, _deadline: Deadline) -> Result<SolveOutcome<'a>> {
        let started = Instant::now();
        let mut stats = SearchStatistics::default();

        let order = dispatch(instance, self.rule);
        stats.on_candidate();
        let schedule = simulate(instance, &order)?;
        stats.set_elapsed(started.elapsed());

        tracing::info!(
            makespan = schedule.makespan(),
            rule = %self.rule,
            "Greedy dispatch finished"
        );
        Ok(SolveOutcome::solved(
            instance,
            order,
            schedule,
            ExitCause::Blocked,
            stats,
        ))
    }
}
