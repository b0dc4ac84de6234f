//! Schedule (simulated solution) model.
//!
//! A schedule holds the start and end time of every operation, as computed
//! by [`simulate`](crate::simulation::simulate) from a resource order. It
//! also remembers each operation's machine predecessor so that the critical
//! path can be traced without going back to the encoding.
//!
//! Schedules are never built by hand and never patched: any change to the
//! encoding means a fresh simulation. For the same reason a schedule can be
//! serialized for reporting but not deserialized.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7.3

use serde::Serialize;

use super::Operation;

/// Timings of every operation of an instance under one resource order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    num_jobs: usize,
    num_tasks: usize,
    /// Job-major start times.
    starts: Vec<i64>,
    /// Job-major end times.
    ends: Vec<i64>,
    /// Previous operation on the same machine, job-major.
    machine_predecessors: Vec<Option<Operation>>,
    makespan: i64,
}

impl Schedule {
    pub(crate) fn from_timings(
        num_jobs: usize,
        num_tasks: usize,
        starts: Vec<i64>,
        ends: Vec<i64>,
        machine_predecessors: Vec<Option<Operation>>,
    ) -> Self {
        let makespan = ends.iter().copied().max().unwrap_or(0);
        Self {
            num_jobs,
            num_tasks,
            starts,
            ends,
            machine_predecessors,
            makespan,
        }
    }

    /// Number of jobs.
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of operations per job.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Makespan: latest end time over all operations.
    #[inline]
    pub fn makespan(&self) -> i64 {
        self.makespan
    }

    /// Start time of `op`.
    #[inline]
    pub fn start(&self, op: Operation) -> i64 {
        self.starts[op.index(self.num_tasks)]
    }

    /// End time of `op`.
    #[inline]
    pub fn end(&self, op: Operation) -> i64 {
        self.ends[op.index(self.num_tasks)]
    }

    /// The operation scheduled right before `op` on its machine.
    #[inline]
    pub fn machine_predecessor(&self, op: Operation) -> Option<Operation> {
        self.machine_predecessors[op.index(self.num_tasks)]
    }

    /// All operations in job-major order.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        let num_tasks = self.num_tasks;
        (0..self.num_jobs)
            .flat_map(move |job| (0..num_tasks).map(move |task| Operation::new(job, task)))
    }

    /// Completion time of job `job` (end of its last operation).
    pub fn job_completion(&self, job: usize) -> Option<i64> {
        self.num_tasks
            .checked_sub(1)
            .filter(|_| job < self.num_jobs)
            .map(|last| self.end(Operation::new(job, last)))
    }

    /// One critical path, in execution order.
    ///
    /// Starts from the first operation (job-major) whose end equals the
    /// makespan and walks back over tight edges, i.e. predecessors whose end
    /// equals the current start. When both the machine predecessor and the
    /// job predecessor are tight, the machine predecessor is taken so the
    /// path stays on one machine as long as possible. The walk stops at an
    /// operation with no tight predecessor.
    ///
    /// Empty only when the instance has no operations.
    pub fn critical_path(&self) -> Vec<Operation> {
        let Some(mut current) = self.operations().find(|&op| self.end(op) == self.makespan) else {
            return Vec::new();
        };

        let mut path = vec![current];
        loop {
            let start = self.start(current);
            let tight = |pred: &Operation| self.end(*pred) == start;
            let next = self
                .machine_predecessor(current)
                .filter(tight)
                .or_else(|| current.job_predecessor().filter(tight));
            match next {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}
