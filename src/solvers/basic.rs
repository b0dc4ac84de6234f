//! Round-robin baseline solver.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::Solver;
use crate::deadline::Deadline;
use crate::encoding::JobNumbers;
use crate::error::Result;
use crate::models::Instance;
use crate::result::{ExitCause, SearchStatistics, SolveOutcome};
use crate::simulation::simulate;

/// Schedules the jobs in turn: the first operation of every job, then the
/// second of every job, and so on.
///
/// A reference point for the other solvers, not a heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicSolver;

impl Solver for BasicSolver {
    fn name(&self) -> String {
        "basic".to_string()
    }

    #[tracing::instrument(level = "debug", name = "Basic", skip_all)]
    fn solve<'a>(&self, instance: &'a Instance, _deadline: Deadline) -> Result<SolveOutcome<'a>> {
        let started = Instant::now();
        let mut stats = SearchStatistics::default();

        let order = JobNumbers::round_robin(instance).to_resource_order(instance)?;
        stats.on_candidate();
        let schedule = simulate(instance, &order)?;
        stats.set_elapsed(started.elapsed());

        tracing::info!(makespan = schedule.makespan(), "Round-robin schedule built");
        Ok(SolveOutcome::solved(
            instance,
            order,
            schedule,
            ExitCause::Blocked,
            stats,
        ))
    }
}
