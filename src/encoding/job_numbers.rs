//! Job-number (operation sequence) encoding.
//!
//! A permutation with repetition of job indices: the k-th occurrence of job
//! `j` denotes operation `(j, k)`. Reading the vector left to right and
//! appending each operation to its machine always yields a feasible
//! resource order, which makes this encoding a convenient source of random
//! and round-robin starting points.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to job shop
//! scheduling with genetic algorithms"

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ResourceOrder;
use crate::error::{JobShopError, Result};
use crate::models::{Instance, Operation};

/// Sequence of job indices, one entry per operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobNumbers {
    jobs: Vec<usize>,
}

impl JobNumbers {
    /// Wraps an explicit sequence. Not validated.
    pub fn new(jobs: Vec<usize>) -> Self {
        Self { jobs }
    }

    /// `0, 1, …, J-1` repeated `T` times.
    pub fn round_robin(instance: &Instance) -> Self {
        let jobs = (0..instance.num_tasks())
            .flat_map(|_| 0..instance.num_jobs())
            .collect();
        Self { jobs }
    }

    /// A uniformly shuffled sequence.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        let mut numbers = Self::round_robin(instance);
        numbers.jobs.shuffle(rng);
        numbers
    }

    /// The raw job sequence.
    pub fn as_slice(&self) -> &[usize] {
        &self.jobs
    }

    /// Whether every job of `instance` appears exactly `T` times.
    pub fn is_valid(&self, instance: &Instance) -> bool {
        if self.jobs.len() != instance.operation_count() {
            return false;
        }
        let mut counts = vec![0usize; instance.num_jobs()];
        for &job in &self.jobs {
            match counts.get_mut(job) {
                Some(c) => *c += 1,
                None => return false,
            }
        }
        counts.iter().all(|&c| c == instance.num_tasks())
    }

    /// Decodes into a resource order.
    ///
    /// Fails with [`JobShopError::InvalidEncoding`] if the sequence is not
    /// valid for `instance`.
    pub fn to_resource_order(&self, instance: &Instance) -> Result<ResourceOrder> {
        if !self.is_valid(instance) {
            return Err(JobShopError::InvalidEncoding(format!(
                "job sequence of length {} is not a valid {}x{} job-number vector",
                self.jobs.len(),
                instance.num_jobs(),
                instance.num_tasks()
            )));
        }

        let mut next_task = vec![0usize; instance.num_jobs()];
        let mut order = ResourceOrder::empty(instance);
        for &job in &self.jobs {
            let op = Operation::new(job, next_task[job]);
            next_task[job] += 1;
            order.push(instance.machine_of(op), op);
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use crate::testing::{ft06, two_by_two};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_robin() {
        let inst = two_by_two();
        let numbers = JobNumbers::round_robin(&inst);
        assert_eq!(numbers.as_slice(), &[0, 1, 0, 1]);
        assert!(numbers.is_valid(&inst));
    }

    #[test]
    fn test_decode() {
        let inst = two_by_two();
        let order = JobNumbers::new(vec![1, 1, 0, 0])
            .to_resource_order(&inst)
            .unwrap();
        // job 1 first on both machines
        assert_eq!(
            order.machine(0),
            &[Operation::new(1, 1), Operation::new(0, 0)]
        );
        assert_eq!(
            order.machine(1),
            &[Operation::new(1, 0), Operation::new(0, 1)]
        );
    }

    #[test]
    fn test_invalid_counts() {
        let inst = two_by_two();
        assert!(!JobNumbers::new(vec![0, 0, 0, 1]).is_valid(&inst));
        assert!(!JobNumbers::new(vec![0, 1, 0]).is_valid(&inst));
        assert!(!JobNumbers::new(vec![0, 1, 2, 1]).is_valid(&inst));
        assert!(matches!(
            JobNumbers::new(vec![0, 0, 0, 1]).to_resource_order(&inst),
            Err(JobShopError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_random_is_always_feasible() {
        let inst = ft06();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let numbers = JobNumbers::random(&inst, &mut rng);
            assert!(numbers.is_valid(&inst));
            let order = numbers.to_resource_order(&inst).unwrap();
            let schedule = simulate(&inst, &order).unwrap();
            assert!(schedule.makespan() >= inst.lower_bound());
        }
    }
}
