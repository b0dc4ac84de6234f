//! Solver outcomes.
//!
//! Every solver returns a [`SolveOutcome`]: the best order and schedule it
//! found, why it stopped, and counters describing the run.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::encoding::ResourceOrder;
use crate::models::{Instance, Schedule};

/// Why a solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitCause {
    /// No permitted neighbor improves (descent) or is admissible (tabu).
    Blocked,
    /// The deadline passed.
    Timeout,
    /// The configured iteration or sample budget was used up.
    IterationBudget,
    /// The critical path has no block: the makespan equals a job's total
    /// duration and cannot be improved.
    ProvedOptimal,
}

impl fmt::Display for ExitCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExitCause::Blocked => "blocked",
            ExitCause::Timeout => "timeout",
            ExitCause::IterationBudget => "iteration budget",
            ExitCause::ProvedOptimal => "proved optimal",
        };
        f.write_str(s)
    }
}

/// Counters collected during a solver run.
///
/// Updated from the search loop with saturating arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Iterations (moves considered as a batch) performed.
    pub iterations: u64,
    /// Candidate encodings simulated.
    pub candidates_evaluated: u64,
    /// Candidates discarded because their order had a cycle.
    pub infeasible_candidates: u64,
    /// Candidates rejected by the tabu list.
    pub tabu_rejected: u64,
    /// Times the best-known makespan improved.
    pub improvements: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    #[inline]
    pub fn on_candidate(&mut self) {
        self.candidates_evaluated = self.candidates_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_infeasible(&mut self) {
        self.infeasible_candidates = self.infeasible_candidates.saturating_add(1);
    }

    #[inline]
    pub fn on_tabu_rejected(&mut self) {
        self.tabu_rejected = self.tabu_rejected.saturating_add(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    /// Sets the total run time.
    #[inline]
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search statistics:")?;
        writeln!(f, "   Iterations:            {}", self.iterations)?;
        writeln!(f, "   Candidates evaluated:  {}", self.candidates_evaluated)?;
        writeln!(f, "   Infeasible candidates: {}", self.infeasible_candidates)?;
        writeln!(f, "   Tabu rejected:         {}", self.tabu_rejected)?;
        writeln!(f, "   Improvements:          {}", self.improvements)?;
        writeln!(f, "   Elapsed:               {:?}", self.elapsed)?;
        Ok(())
    }
}

/// Result of a solver run, tied to the instance it solved.
///
/// `order` and `schedule` are both `Some` or both `None`. They are `None`
/// only when the deadline expired before any feasible solution was found.
#[derive(Debug, Clone)]
pub struct SolveOutcome<'a> {
    instance: &'a Instance,
    best: Option<(ResourceOrder, Schedule)>,
    exit_cause: ExitCause,
    statistics: SearchStatistics,
}

impl<'a> SolveOutcome<'a> {
    /// An outcome carrying a solution.
    pub fn solved(
        instance: &'a Instance,
        order: ResourceOrder,
        schedule: Schedule,
        exit_cause: ExitCause,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            instance,
            best: Some((order, schedule)),
            exit_cause,
            statistics,
        }
    }

    /// An outcome without a solution.
    pub fn unsolved(
        instance: &'a Instance,
        exit_cause: ExitCause,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            instance,
            best: None,
            exit_cause,
            statistics,
        }
    }

    /// The instance this outcome belongs to.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn order(&self) -> Option<&ResourceOrder> {
        self.best.as_ref().map(|(order, _)| order)
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.best.as_ref().map(|(_, schedule)| schedule)
    }

    /// Makespan of the best schedule.
    pub fn makespan(&self) -> Option<i64> {
        self.schedule().map(Schedule::makespan)
    }

    pub fn exit_cause(&self) -> ExitCause {
        self.exit_cause
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Whether a solution is present.
    pub fn has_solution(&self) -> bool {
        self.best.is_some()
    }

    /// Consumes the outcome and returns the best order and schedule.
    pub fn into_solution(self) -> Option<(ResourceOrder, Schedule)> {
        self.best
    }
}
