//! Solvers: constructive heuristics and local search drivers.
//!
//! | Solver | Strategy | Stops on |
//! |--------|----------|----------|
//! | `BasicSolver` | Round-robin job sequence | Immediately |
//! | `RandomSolver` | Best of random job sequences | Sample budget, deadline |
//! | `GreedySolver` | Priority-rule dispatching | Immediately |
//! | `DescentSolver` | Best-improvement over critical blocks | Local optimum, deadline, budget |
//! | `TabuSolver` | Tabu search over critical blocks | Iteration budget, deadline |
//!
//! [`SolverConfig`] names every solver and can be parsed from a string or
//! deserialized, so harnesses can pick solvers by name.
//!
//! # References
//!
//! - Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the job
//!   shop problem"
//! - Glover & Laguna (1997), "Tabu Search"

mod basic;
mod config;
mod descent;
mod greedy;
mod random;
mod tabu;

pub use basic::BasicSolver;
pub use config::SolverConfig;
pub use descent::DescentSolver;
pub use greedy::GreedySolver;
pub use random::RandomSolver;
pub use tabu::TabuSolver;

use crate::deadline::Deadline;
use crate::encoding::ResourceOrder;
use crate::error::Result;
use crate::models::{Instance, Schedule};
use crate::result::{SearchStatistics, SolveOutcome};
use crate::simulation::simulate;

/// A job-shop solver.
///
/// `solve` returns `Err` only for contract violations such as a malformed
/// encoding. Infeasible candidates met during search are skipped, and an
/// expired deadline is reported through
/// [`ExitCause::Timeout`](crate::result::ExitCause::Timeout).
pub trait Solver {
    /// Solver name (e.g., "SPT", "EST_LRPT_Tabu").
    fn name(&self) -> String;

    /// Solves `instance`, returning the best solution found before
    /// `deadline`.
    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> Result<SolveOutcome<'a>>;
}

/// Simulates a candidate, counting it in `stats`.
///
/// Returns `Ok(None)` when the candidate's order has a cycle.
pub(crate) fn evaluate_candidate(
    instance: &Instance,
    order: &ResourceOrder,
    stats: &mut SearchStatistics,
) -> Result<Option<Schedule>> {
    stats.on_candidate();
    match simulate(instance, order) {
        Ok(schedule) => Ok(Some(schedule)),
        Err(err) if err.is_recoverable() => {
            stats.on_infeasible();
            tracing::trace!(error = %err, "Skipping infeasible candidate");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
