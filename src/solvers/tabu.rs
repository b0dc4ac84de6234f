//! Tabu search over critical blocks.
//!
//! # Algorithm
//! 1. Start from a greedy dispatch (EST_LRPT by default)
//! 2. Each iteration, simulate every boundary swap of the *current*
//!    solution's critical blocks
//! 3. Move to the best admissible candidate, even if it is worse than the
//!    current one. A swap is admissible if it is not tabu, or if it yields a
//!    makespan strictly below the best ever seen (aspiration)
//! 4. Forbid the position pair just swapped for `tenure` iterations, so the
//!    move is not undone right away
//!
//! The best solution ever visited is returned.
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the job
//! shop problem", Management Science 42(6)

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

/// Tabu search seeded by a priority rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuSolver {
    /// Rule of the initial greedy dispatch.
    pub initial_rule: PriorityRule,
    /// Maximum number of iterations.
    pub max_iterations: u64,
    /// Number of iterations a swapped position pair stays forbidden.
    pub tenure: u64,
}

impl Default for TabuSolver {
    fn default() -> Self {
        Self {
            initial_rule: PriorityRule::EstLrpt,
            max_iterations: 200,
            tenure: 10,
        }
    }
}

impl TabuSolver {
    /// Creates a solver with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule of the initial dispatch.
    pub fn with_initial_rule(mut self, rule: PriorityRule) -> Self {
        self.initial_rule = rule;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tenure(mut self, tenure: u64) -> Self {
        self.tenure = tenure;
        self
    }
}

/// Iteration until which each (machine, position, position) pair is tabu.
#[derive(Debug, Clone)]
struct TabuList {
    /// Largest number of operations on one machine.
    width: usize,
    tenure: u64,
    forbidden_until: Vec<u64>,
}

impl TabuList {
    fn new(instance: &Instance, tenure: u64) -> Self {
        let width = instance
            .machine_operation_counts()
            .into_iter()
            .max()
            .unwrap_or(0);
        Self {
            width,
            tenure,
            forbidden_until: vec![0; instance.num_machines() * width * width],
        }
    }

    #[inline]
    fn slot(&self, swap: &Swap) -> usize {
        (swap.machine * self.width + swap.first) * self.width + swap.second
    }

    fn is_forbidden(&self, swap: &Swap, iteration: u64) -> bool {
        self.forbidden_until[self.slot(swap)] > iteration
    }

    fn forbid(&mut self, swap: &Swap, iteration: u64) {
        let slot = self.slot(swap);
        self.forbidden_until[slot] = iteration.saturating_add(self.tenure);
    }

    /// Whether a move to `makespan` is allowed, given the best-ever makespan.
    fn admits(&self, swap: &Swap, iteration: u64, makespan: i64, best: i64) -> bool {
        !self.is_forbidden(swap, iteration) || makespan < best
    }
}

impl Solver for TabuSolver {
    fn name(&self) -> String {
        format!("{}_Tabu", self.initial_rule)
    }

    #[tracing::instrument(
        level = "debug",
        name = "Tabu Search",
        skip_all,
        fields(rule = %self.initial_rule, tenure = self.tenure)
    )]
    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> Result<SolveOutcome<'a>> {
        let tabu = TabuList::new(instance, self.tenure);
        self.search(instance, dispatch(instance, self.initial_rule), tabu, deadline)
    }
}

impl TabuSolver {
    /// Runs the search from `initial` with the given tabu state.
    fn search<'a>(
        &self,
        instance: &'a Instance,
        initial: ResourceOrder,
        mut tabu: TabuList,
        deadline: Deadline,
    ) -> Result<SolveOutcome<'a>> {
        let started = Instant::now();
        let mut stats = SearchStatistics::default();

        let mut current_order = initial;
        stats.on_candidate();
        let mut current_schedule = simulate(instance, &current_order)?;
        let mut best_order = current_order.clone();
        let mut best_schedule = current_schedule.clone();
        tracing::debug!(makespan = best_schedule.makespan(), "Initial dispatch");

        let exit = loop {
            if deadline.is_expired() {
                break ExitCause::Timeout;
            }
            if stats.iterations >= self.max_iterations {
                break ExitCause::IterationBudget;
            }

            let swaps = neighborhood(instance, &current_order, &current_schedule);
            if swaps.is_empty() {
                break ExitCause::ProvedOptimal;
            }
            stats.on_iteration();
            let iteration = stats.iterations;

            let mut chosen: Option<(ResourceOrder, Schedule, Swap)> = None;
            for swap in swaps {
                let candidate = swap.applied_to(&current_order);
                let Some(schedule) = evaluate_candidate(instance, &candidate, &mut stats)? else {
                    continue;
                };
                if !tabu.admits(&swap, iteration, schedule.makespan(), best_schedule.makespan()) {
                    stats.on_tabu_rejected();
                    continue;
                }
                let better = chosen
                    .as_ref()
                    .map_or(true, |(_, s, _)| schedule.makespan() < s.makespan());
                if better {
                    chosen = Some((candidate, schedule, swap));
                }
            }

            let Some((order, schedule, swap)) = chosen else {
                break ExitCause::Blocked;
            };
            tabu.forbid(&swap, iteration);
            tracing::debug!(
                iteration,
                machine = swap.machine,
                first = swap.first,
                second = swap.second,
                makespan = schedule.makespan(),
                "Tabu move"
            );

            if schedule.makespan() < best_schedule.makespan() {
                stats.on_improvement();
                tracing::debug!(makespan = schedule.makespan(), iteration, "New best");
                best_order = order.clone();
                best_schedule = schedule.clone();
            }
            current_order = order;
            current_schedule = schedule;
        };
        stats.set_elapsed(started.elapsed());

        tracing::info!(
            makespan = best_schedule.makespan(),
            iterations = stats.iterations,
            exit = %exit,
            "Tabu search finished"
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
