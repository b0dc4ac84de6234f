//! Disjunctive-graph simulation.
//!
//! Turns a resource order into timings. Nodes are operations; arcs are the
//! job chains `(j, t) → (j, t+1)` plus the machine chains given by the
//! order. Operations are timed in a topological order of that graph, each
//! starting as soon as both its job predecessor and machine predecessor have
//! finished.
//!
//! # Algorithm
//! Kahn's algorithm over a flat arena with in-degree counters. The queue is
//! seeded in job-major order. If the arcs form a cycle, some nodes never
//! reach in-degree zero and the order is reported infeasible.
//!
//! # Complexity
//! O(J·T) time and memory.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::VecDeque;

use crate::encoding::ResourceOrder;
use crate::error::{JobShopError, Result};
use crate::models::{Instance, Operation, Schedule};

/// Computes the schedule induced by `order`.
///
/// # Errors
/// - [`JobShopError::InvalidEncoding`] if `order` is not a per-machine
///   permutation of the instance's operations.
/// - [`JobShopError::Infeasible`] if job precedence and machine order form
///   a cycle.
pub fn simulate(instance: &Instance, order: &ResourceOrder) -> Result<Schedule> {
    order.validate(instance)?;

    let num_tasks = instance.num_tasks();
    let total = instance.operation_count();

    let mut machine_pred: Vec<Option<usize>> = vec![None; total];
    let mut machine_succ: Vec<Option<usize>> = vec![None; total];
    for machine in 0..order.num_machines() {
        for pair in order.machine(machine).windows(2) {
            let (a, b) = (pair[0].index(num_tasks), pair[1].index(num_tasks));
            machine_succ[a] = Some(b);
            machine_pred[b] = Some(a);
        }
    }

    let mut in_degree: Vec<u8> = (0..total)
        .map(|idx| u8::from(idx % num_tasks != 0) + u8::from(machine_pred[idx].is_some()))
        .collect();

    let mut queue: VecDeque<usize> = (0..total).filter(|&idx| in_degree[idx] == 0).collect();
    let mut starts = vec![0i64; total];
    let mut ends = vec![0i64; total];
    let mut scheduled = 0usize;

    while let Some(idx) = queue.pop_front() {
        scheduled += 1;

        let job_ready = if idx % num_tasks != 0 { ends[idx - 1] } else { 0 };
        let machine_ready = machine_pred[idx].map_or(0, |p| ends[p]);
        let op = Operation::from_index(idx, num_tasks);
        starts[idx] = job_ready.max(machine_ready);
        ends[idx] = starts[idx] + instance.duration_of(op);

        let job_succ = (op.task + 1 < num_tasks).then_some(idx + 1);
        for succ in job_succ.into_iter().chain(machine_succ[idx]) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }

    if scheduled < total {
        return Err(JobShopError::Infeasible { scheduled, total });
    }

    let machine_predecessors = machine_pred
        .into_iter()
        .map(|p| p.map(|p| Operation::from_index(p, num_tasks)))
        .collect();

    Ok(Schedule::from_timings(
        instance.num_jobs(),
        num_tasks,
        starts,
        ends,
        machine_predecessors,
    ))
}
