//! Random sampling solver.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::{evaluate_candidate, Solver};
use crate::deadline::Deadline;
use crate::encoding::{JobNumbers, ResourceOrder};
use crate::error::Result;
use crate::models::{Instance, Schedule};
use crate::result::{ExitCause, SearchStatistics, SolveOutcome};

/// Samples random job-number sequences and keeps the best schedule.
///
/// Every sample is feasible by construction. The run is reproducible for a
/// given `seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSolver {
    /// Number of sequences to sample.
    pub samples: u64,
    /// Seed of the random generator.
    pub seed: u64,
}

impl Default for RandomSolver {
    fn default() -> Self {
        Self {
            samples: 1000,
            seed: 0,
        }
    }
}

impl RandomSolver {
    /// Creates a solver with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of samples.
    pub fn with_samples(mut self, samples: u64) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Solver for RandomSolver {
    fn name(&self) -> String {
        "random".to_string()
    }

    #[tracing::instrument(level = "debug", name = "Random", skip_all, fields(samples = self.samples, seed = self.seed))]
    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> Result<SolveOutcome<'a>> {
        let started = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut stats = SearchStatistics::default();
        let mut best: Option<(ResourceOrder, Schedule)> = None;
        let mut exit = ExitCause::IterationBudget;

        for _ in 0..self.samples {
            if deadline.is_expired() {
                exit = ExitCause::Timeout;
                break;
            }
            stats.on_iteration();

            let order = JobNumbers::random(instance, &mut rng).to_resource_order(instance)?;
            let Some(schedule) = evaluate_candidate(instance, &order, &mut stats)? else {
                continue;
            };
            let improves = best
                .as_ref()
                .map_or(true, |(_, b)| schedule.makespan() < b.makespan());
            if improves {
                stats.on_improvement();
                tracing::debug!(makespan = schedule.makespan(), sample = stats.iterations, "New best sample");
                best = Some((order, schedule));
            }
        }
        stats.set_elapsed(started.elapsed());

        tracing::info!(
            makespan = best.as_ref().map(|(_, s)| s.makespan()),
            iterations = stats.iterations,
            exit = %exit,
            "Random sampling finished"
        );
        Ok(match best {
            Some((order, schedule)) => SolveOutcome::solved(instance, order, schedule, exit, stats),
            None => SolveOutcome::unsolved(instance, exit, stats),
        })
    }
}
