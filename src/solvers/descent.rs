//! Steepest-descent local search over critical blocks.
//!
//! # Algorithm
//! 1. Start from a greedy dispatch
//! 2. Compute the critical path and its blocks for the current solution
//! 3. Simulate every boundary swap on a copy; skip infeasible ones
//! 4. Move to the best candidate if it is strictly better, else stop
//!
//! Descent is monotone: the makespan never increases. It stops at a local
//! optimum, when the critical path has no block, or when the deadline or
//! iteration budget runs out.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{evaluate_candidate, Solver};
use crate::deadline::Deadline;
use crate::dispatching::{dispatch, PriorityRule};
use crate::encoding::ResourceOrder;
use crate::error::Result;
use crate::models::{Instance, Schedule};
use crate::neighborhood::{neighborhood, Swap};
use crate::result::{ExitCause, SearchStatistics, SolveOutcome};
use crate::simulation::simulate;

/// Best-improvement descent seeded by a priority rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentSolver {
    /// Rule of the initial greedy dispatch.
    pub initial_rule: PriorityRule,
    /// Optional cap on the number of moves.
    pub max_iterations: Option<u64>,
}

impl DescentSolver {
    /// Creates a descent solver seeded by SPT, without iteration cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule of the initial dispatch.
    pub fn with_initial_rule(mut self, rule: PriorityRule) -> Self {
        self.initial_rule = rule;
        self
    }

    /// Caps the number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

impl Solver for DescentSolver {
    fn name(&self) -> String {
        format!("{}_Descent", self.initial_rule)
    }

    #[tracing::instrument(level = "debug", name = "Descent", skip_all, fields(rule = %self.initial_rule))]
    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> Result<SolveOutcome<'a>> {
        let started = Instant::now();
        let mut stats = SearchStatistics::default();

        let mut best_order = dispatch(instance, self.initial_rule);
        stats.on_candidate();
        let mut best_schedule = simulate(instance, &best_order)?;
        tracing::debug!(makespan = best_schedule.makespan(), "Initial dispatch");

        let exit = loop {
            if deadline.is_expired() {
                break ExitCause::Timeout;
            }
            if self.max_iterations.is_some_and(|max| stats.iterations >= max) {
                break ExitCause::IterationBudget;
            }

            let swaps = neighborhood(instance, &best_order, &best_schedule);
            if swaps.is_empty() {
                break ExitCause::ProvedOptimal;
            }
            stats.on_iteration();

            let mut improvement: Option<(ResourceOrder, Schedule, Swap)> = None;
            for swap in swaps {
                let candidate = swap.applied_to(&best_order);
                let Some(schedule) = evaluate_candidate(instance, &candidate, &mut stats)? else {
                    continue;
                };
                let threshold = improvement
                    .as_ref()
                    .map_or(best_schedule.makespan(), |(_, s, _)| s.makespan());
                if schedule.makespan() < threshold {
                    improvement = Some((candidate, schedule, swap));
                }
            }

            match improvement {
                Some((order, schedule, swap)) => {
                    stats.on_improvement();
                    tracing::debug!(
                        machine = swap.machine,
                        first = swap.first,
                        second = swap.second,
                        makespan = schedule.makespan(),
                        "Improving swap"
                    );
                    best_order = order;
                    best_schedule = schedule;
                }
                None => break ExitCause::Blocked,
            }
        };
        stats.set_elapsed(started.elapsed());

        tracing::info!(
            makespan = best_schedule.makespan(),
            iterations = stats.iterations,
            exit = %exit,
            "Descent finished"
        );
        Ok(SolveOutcome::solved(
            instance,
            best_order,
            best_schedule,
            exit,
            stats,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ft06, three_by_three, two_by_two};
    use crate::validation::validate_schedule;
    use tracing_test::traced_test;

    #[test]
    fn test_never_worse_than_initial() {
        for inst in [three_by_three(), ft06()] {
            for rule in PriorityRule::ALL {
                let initial = simulate(&inst, &dispatch(&inst, rule)).unwrap().makespan();
                let outcome = DescentSolver::new()
                    .with_initial_rule(rule)
                    .solve(&inst, Deadline::none())
                    .unwrap();
                let schedule = outcome.schedule().unwrap();
                assert!(schedule.makespan() <= initial);
                assert!(validate_schedule(&inst, schedule).is_ok());
            }
        }
    }

    #[test]
    fn test_stops_at_local_optimum() {
        let inst = ft06();
        let outcome = DescentSolver::new().solve(&inst, Deadline::none()).unwrap();
        if outcome.exit_cause() == ExitCause::Blocked {
            // no boundary swap improves the returned solution
            let order = outcome.order().unwrap();
            let schedule = outcome.schedule().unwrap();
            for swap in neighborhood(&inst, order, schedule) {
                if let Ok(s) = simulate(&inst, &swap.applied_to(order)) {
                    assert!(s.makespan() >= schedule.makespan());
                }
            }
        } else {
            assert_eq!(outcome.exit_cause(), ExitCause::ProvedOptimal);
        }
    }

    #[test]
    fn test_two_by_two_blocked_at_optimum() {
        // SPT gives 7, which equals the machine-0 load; the only swap is worse.
        let inst = two_by_two();
        let outcome = DescentSolver::new().solve(&inst, Deadline::none()).unwrap();
        assert_eq!(outcome.makespan(), Some(7));
        assert_eq!(outcome.exit_cause(), ExitCause::Blocked);
        assert_eq!(outcome.statistics().iterations, 1);
        assert_eq!(outcome.statistics().improvements, 0);
    }

    #[test]
    fn test_lpt_start_takes_improving_swap() {
        // LPT gives 11; swapping the m1 block recovers the optimum of 7.
        let inst = two_by_two();
        let outcome = DescentSolver::new()
            .with_initial_rule(PriorityRule::Lpt)
            .solve(&inst, Deadline::none())
            .unwrap();
        assert_eq!(outcome.makespan(), Some(7));
        assert_eq!(outcome.exit_cause(), ExitCause::Blocked);
        assert_eq!(outcome.statistics().iterations, 2);
        assert_eq!(outcome.statistics().improvements, 1);
    }

    #[test]
    fn test_single_job_proved_optimal() {
        let inst = Instance::new(2, vec![vec![(0, 3), (1, 2), (0, 1)]]).unwrap();
        let outcome = DescentSolver::new().solve(&inst, Deadline::none()).unwrap();
        assert_eq!(outcome.exit_cause(), ExitCause::ProvedOptimal);
        assert_eq!(outcome.makespan(), Some(6));
    }

    #[test]
    fn test_timeout_returns_initial() {
        let inst = ft06();
        let outcome = DescentSolver::new()
            .with_initial_rule(PriorityRule::Lrpt)
            .solve(&inst, Deadline::at(Instant::now()))
            .unwrap();
        assert_eq!(outcome.exit_cause(), ExitCause::Timeout);
        let initial = simulate(&inst, &dispatch(&inst, PriorityRule::Lrpt)).unwrap();
        assert_eq!(outcome.makespan(), Some(initial.makespan()));
    }

    #[test]
    fn test_iteration_budget() {
        let inst = ft06();
        let outcome = DescentSolver::new()
            .with_max_iterations(0)
            .solve(&inst, Deadline::none())
            .unwrap();
        assert_eq!(outcome.exit_cause(), ExitCause::IterationBudget);
        assert_eq!(outcome.statistics().iterations, 0);
    }

    #[test]
    fn test_name() {
        let solver = DescentSolver::new().with_initial_rule(PriorityRule::EstSpt);
        assert_eq!(solver.name(), "EST_SPT_Descent");
    }

    #[test]
    #[traced_test]
    fn test_logs_exit() {
        let inst = two_by_two();
        DescentSolver::new().solve(&inst, Deadline::none()).unwrap();
        assert!(logs_contain("Descent finished"));
        assert!(logs_contain("exit=blocked"));
    }
}
