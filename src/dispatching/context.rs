//! Dispatch state passed to dispatching rules.

use crate::models::{Instance, Operation};

/// Running state of a greedy dispatch.
///
/// Tracks, per job and per machine, the time at which it becomes free if
/// the already dispatched operations were executed as early as possible,
/// and the processing time each job still has to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchContext {
    /// End of the last dispatched operation, per job.
    pub job_ready: Vec<i64>,
    /// End of the last dispatched operation, per machine.
    pub machine_ready: Vec<i64>,
    /// Sum of undispatched durations, per job.
    pub remaining_work: Vec<i64>,
}

impl DispatchContext {
    /// Initial state: everything free at 0, no work dispatched.
    pub fn new(instance: &Instance) -> Self {
        Self {
            job_ready: vec![0; instance.num_jobs()],
            machine_ready: vec![0; instance.num_machines()],
            remaining_work: (0..instance.num_jobs())
                .map(|j| instance.job_duration(j))
                .collect(),
        }
    }

    /// Earliest time `op` could start if dispatched now.
    #[inline]
    pub fn earliest_start(&self, instance: &Instance, op: Operation) -> i64 {
        self.job_ready[op.job].max(self.machine_ready[instance.machine_of(op)])
    }

    /// Remaining processing time of `job`, including its next operation.
    #[inline]
    pub fn remaining_work(&self, job: usize) -> i64 {
        self.remaining_work[job]
    }

    /// Records the dispatch of `op` and returns its `(start, end)`.
    pub fn record(&mut self, instance: &Instance, op: Operation) -> (i64, i64) {
        let start = self.earliest_start(instance, op);
        let duration = instance.duration_of(op);
        let end = start + duration;
        self.job_ready[op.job] = end;
        self.machine_ready[instance.machine_of(op)] = end;
        self.remaining_work[op.job] -= duration;
        (start, end)
    }
}
