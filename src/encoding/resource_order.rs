//! Resource-order encoding.
//!
//! For every machine, the sequence in which its operations are processed.
//! Combined with job precedence this fixes a disjunctive-graph orientation;
//! the timing follows by [`simulate`](crate::simulation::simulate).

use serde::{Deserialize, Serialize};

use crate::error::{JobShopError, Result};
use crate::models::{Instance, Operation};
use crate::validation::validate_resource_order;

/// Per-machine operation ordering.
///
/// Candidates are derived by cloning and mutating; a `ResourceOrder` held by
/// a solver as its current or best solution is never modified in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceOrder {
    tasks_by_machine: Vec<Vec<Operation>>,
}

impl ResourceOrder {
    /// An order with one empty list per machine of `instance`.
    pub fn empty(instance: &Instance) -> Self {
        let counts = instance.machine_operation_counts();
        Self {
            tasks_by_machine: counts.into_iter().map(Vec::with_capacity).collect(),
        }
    }

    /// Builds an order from explicit machine lists. Not validated.
    pub fn from_machine_orders(tasks_by_machine: Vec<Vec<Operation>>) -> Self {
        Self { tasks_by_machine }
    }

    /// Appends `op` to the end of `machine`'s list.
    pub fn push(&mut self, machine: usize, op: Operation) {
        self.tasks_by_machine[machine].push(op);
    }

    /// Number of machine lists.
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.tasks_by_machine.len()
    }

    /// Operations of `machine`, in processing order.
    #[inline]
    pub fn machine(&self, machine: usize) -> &[Operation] {
        &self.tasks_by_machine[machine]
    }

    /// Position of `op` in `machine`'s list.
    pub fn position(&self, machine: usize, op: Operation) -> Option<usize> {
        self.tasks_by_machine
            .get(machine)?
            .iter()
            .position(|&o| o == op)
    }

    /// Exchanges positions `a` and `b` on `machine`.
    ///
    /// # Panics
    /// If `machine`, `a` or `b` is out of range.
    pub fn swap(&mut self, machine: usize, a: usize, b: usize) {
        self.tasks_by_machine[machine].swap(a, b);
    }

    /// Checks that every machine list is a permutation of that machine's
    /// operations in `instance`.
    pub fn validate(&self, instance: &Instance) -> Result<()> {
        validate_resource_order(instance, self).map_err(|errors| {
            JobShopError::InvalidEncoding(
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }
}
