//! Operation identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One operation of a job: the `task`-th step of job `job`.
///
/// Identity only. The machine and duration live in the
/// [`Instance`](super::Instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Operation {
    /// Job index (0-based).
    pub job: usize,
    /// Position within the job (0-based).
    pub task: usize,
}

impl Operation {
    /// Creates an operation identity.
    #[inline]
    pub const fn new(job: usize, task: usize) -> Self {
        Self { job, task }
    }

    /// Dense job-major index, given the number of tasks per job.
    #[inline]
    pub(crate) fn index(self, num_tasks: usize) -> usize {
        self.job * num_tasks + self.task
    }

    /// Inverse of [`Operation::index`].
    #[inline]
    pub(crate) fn from_index(index: usize, num_tasks: usize) -> Self {
        Self::new(index / num_tasks, index % num_tasks)
    }

    /// The preceding operation of the same job, if any.
    #[inline]
    pub fn job_predecessor(self) -> Option<Operation> {
        self.task.checked_sub(1).map(|t| Operation::new(self.job, t))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.job, self.task)
    }
}
