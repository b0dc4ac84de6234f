//! Job-shop instance (problem model).
//!
//! An instance holds `J` jobs of `T` operations each. Every operation runs on
//! one of `M` machines for a fixed duration. Operations of a job execute in
//! order; a job may visit the same machine more than once.
//!
//! Instances are immutable once built. Loading from benchmark files is left
//! to the caller; the serde representation is a plain list of jobs:
//!
//! ```json
//! { "num_machines": 2, "jobs": [[{"machine": 0, "duration": 3}], ...] }
//! ```
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7

use serde::{Deserialize, Serialize};

use super::Operation;
use crate::error::{JobShopError, Result};
use crate::validation::validate_jobs;

/// Machine and duration of one operation, as supplied by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Machine the operation runs on (0-based).
    pub machine: usize,
    /// Processing duration.
    pub duration: i64,
}

impl OperationSpec {
    /// Creates an operation spec.
    pub fn new(machine: usize, duration: i64) -> Self {
        Self { machine, duration }
    }
}

impl From<(usize, i64)> for OperationSpec {
    fn from((machine, duration): (usize, i64)) -> Self {
        Self::new(machine, duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InstanceData {
    num_machines: usize,
    jobs: Vec<Vec<OperationSpec>>,
}

/// An immutable job-shop instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InstanceData", into = "InstanceData")]
pub struct Instance {
    num_jobs: usize,
    num_tasks: usize,
    num_machines: usize,
    /// Job-major machine table.
    machines: Vec<usize>,
    /// Job-major duration table.
    durations: Vec<i64>,
}

impl Instance {
    /// Builds an instance from per-job operation lists.
    ///
    /// Fails with [`JobShopError::InvalidInstance`] when jobs have different
    /// lengths, reference a machine `>= num_machines`, or carry a negative
    /// duration.
    pub fn new<S>(num_machines: usize, jobs: Vec<Vec<S>>) -> Result<Self>
    where
        S: Into<OperationSpec>,
    {
        let jobs: Vec<Vec<OperationSpec>> = jobs
            .into_iter()
            .map(|job| job.into_iter().map(Into::into).collect())
            .collect();

        validate_jobs(num_machines, &jobs).map_err(|errors| {
            JobShopError::InvalidInstance(
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        let num_jobs = jobs.len();
        let num_tasks = jobs.first().map_or(0, Vec::len);
        let machines = jobs.iter().flatten().map(|op| op.machine).collect();
        let durations = jobs.iter().flatten().map(|op| op.duration).collect();

        Ok(Self {
            num_jobs,
            num_tasks,
            num_machines,
            machines,
            durations,
        })
    }

    /// Number of jobs (J).
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of operations per job (T).
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Number of machines (M).
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Total number of operations (J × T).
    #[inline]
    pub fn operation_count(&self) -> usize {
        self.durations.len()
    }

    /// Duration of operation `task` of job `job`.
    #[inline]
    pub fn duration(&self, job: usize, task: usize) -> i64 {
        self.durations[job * self.num_tasks + task]
    }

    /// Machine of operation `task` of job `job`.
    #[inline]
    pub fn machine(&self, job: usize, task: usize) -> usize {
        self.machines[job * self.num_tasks + task]
    }

    /// Duration of `op`.
    #[inline]
    pub fn duration_of(&self, op: Operation) -> i64 {
        self.duration(op.job, op.task)
    }

    /// Machine of `op`.
    #[inline]
    pub fn machine_of(&self, op: Operation) -> usize {
        self.machine(op.job, op.task)
    }

    /// Whether `op` names an operation of this instance.
    #[inline]
    pub fn contains(&self, op: Operation) -> bool {
        op.job < self.num_jobs && op.task < self.num_tasks
    }

    /// All operations in job-major order.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        (0..self.num_jobs)
            .flat_map(move |job| (0..self.num_tasks).map(move |task| Operation::new(job, task)))
    }

    /// Operations that run on `machine`, in job-major order.
    pub fn operations_on(&self, machine: usize) -> Vec<Operation> {
        self.operations()
            .filter(|&op| self.machine_of(op) == machine)
            .collect()
    }

    /// Number of operations assigned to each machine.
    pub fn machine_operation_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.num_machines];
        for &m in &self.machines {
            counts[m] += 1;
        }
        counts
    }

    /// Sum of durations of job `job`.
    pub fn job_duration(&self, job: usize) -> i64 {
        (0..self.num_tasks).map(|t| self.duration(job, t)).sum()
    }

    /// Sum of durations of all operations on `machine`.
    pub fn machine_load(&self, machine: usize) -> i64 {
        self.machines
            .iter()
            .zip(&self.durations)
            .filter(|(&m, _)| m == machine)
            .map(|(_, &d)| d)
            .sum()
    }

    /// Trivial makespan lower bound: the longest job or the busiest machine.
    pub fn lower_bound(&self) -> i64 {
        let job_bound = (0..self.num_jobs).map(|j| self.job_duration(j)).max();
        let machine_bound = (0..self.num_machines).map(|m| self.machine_load(m)).max();
        job_bound.max(machine_bound).unwrap_or(0)
    }
}

impl TryFrom<InstanceData> for Instance {
    type Error = JobShopError;

    fn try_from(data: InstanceData) -> Result<Self> {
        Instance::new(data.num_machines, data.jobs)
    }
}

impl From<Instance> for InstanceData {
    fn from(instance: Instance) -> Self {
        let jobs = (0..instance.num_jobs)
            .map(|j| {
                (0..instance.num_tasks)
                    .map(|t| OperationSpec::new(instance.machine(j, t), instance.duration(j, t)))
                    .collect()
            })
            .collect();
        Self {
            num_machines: instance.num_machines,
            jobs,
        }
    }
}
