//! Critical-block neighborhood.
//!
//! A block is a maximal run of consecutive critical-path operations that
//! share a machine. Only swaps at the boundary of a block can shorten the
//! critical path, so the neighborhood is restricted to those:
//!
//! - a block of two operations yields one swap of the pair
//! - a longer block yields the swap of its first two and of its last two
//!
//! # Reference
//! Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the job
//! shop problem", Management Science 42(6)

use serde::{Deserialize, Serialize};

use crate::encoding::ResourceOrder;
use crate::models::{Instance, Operation, Schedule};

/// A run of at least two critical operations on one machine.
///
/// `first` and `last` are positions in the machine's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub machine: usize,
    pub first: usize,
    pub last: usize,
}

impl Block {
    /// Number of operations in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Exchange of two positions on one machine.
///
/// Stored with `first < second`; applying a swap twice restores the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    pub machine: usize,
    pub first: usize,
    pub second: usize,
}

impl Swap {
    /// Creates a swap, normalizing the position pair.
    pub fn new(machine: usize, a: usize, b: usize) -> Self {
        Self {
            machine,
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// Applies the swap in place.
    pub fn apply_on(&self, order: &mut ResourceOrder) {
        order.swap(self.machine, self.first, self.second);
    }

    /// Returns a modified copy, leaving `order` untouched.
    pub fn applied_to(&self, order: &ResourceOrder) -> ResourceOrder {
        let mut candidate = order.clone();
        self.apply_on(&mut candidate);
        candidate
    }
}

/// Splits a critical path into blocks.
///
/// `path` must be in execution order and `order` must be the resource order
/// the path was computed from.
pub fn blocks_of_critical_path(
    instance: &Instance,
    order: &ResourceOrder,
    path: &[Operation],
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut rest = path;

    while let Some(&head) = rest.first() {
        let machine = instance.machine_of(head);
        let run = rest
            .iter()
            .take_while(|&&op| instance.machine_of(op) == machine)
            .count();

        if run >= 2 {
            let first = order.position(machine, head);
            let last = order.position(machine, rest[run - 1]);
            debug_assert!(
                first.is_some() && last.is_some(),
                "critical path operation missing from resource order"
            );
            if let (Some(first), Some(last)) = (first, last) {
                blocks.push(Block {
                    machine,
                    first,
                    last,
                });
            }
        }
        rest = &rest[run..];
    }

    blocks
}

/// Boundary swaps of one block.
pub fn neighbors(block: &Block) -> Vec<Swap> {
    if block.len() == 2 {
        vec![Swap::new(block.machine, block.first, block.last)]
    } else {
        vec![
            Swap::new(block.machine, block.first, block.first + 1),
            Swap::new(block.machine, block.last - 1, block.last),
        ]
    }
}

/// All boundary swaps of the critical path of `schedule`.
pub fn neighborhood(instance: &Instance, order: &ResourceOrder, schedule: &Schedule) -> Vec<Swap> {
    let path = schedule.critical_path();
    blocks_of_critical_path(instance, order, &path)
        .iter()
        .flat_map(neighbors)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use crate::testing::{three_by_three, two_by_two};

    fn op(job: usize, task: usize) -> Operation {
        Operation::new(job, task)
    }

    #[test]
    fn test_two_by_two_block() {
        let inst = two_by_two();
        let order = ResourceOrder::from_machine_orders(vec![
            vec![op(0, 0), op(1, 1)],
            vec![op(1, 0), op(0, 1)],
        ]);
        let schedule = simulate(&inst, &order).unwrap();
        let path = schedule.critical_path();
        assert_eq!(path, vec![op(0, 0), op(1, 1)]);

        let blocks = blocks_of_critical_path(&inst, &order, &path);
        assert_eq!(
            blocks,
            vec![Block {
                machine: 0,
                first: 0,
                last: 1
            }]
        );
        assert_eq!(neighbors(&blocks[0]), vec![Swap::new(0, 0, 1)]);
        assert_eq!(neighborhood(&inst, &order, &schedule), vec![Swap::new(0, 0, 1)]);
    }

    #[test]
    fn test_singletons_dropped() {
        // Path alternates machines, so every run has length one.
        let inst = two_by_two();
        let order = ResourceOrder::from_machine_orders(vec![
            vec![op(0, 0), op(1, 1)],
            vec![op(0, 1), op(1, 0)],
        ]);
        let path = vec![op(0, 0), op(0, 1)];
        assert!(blocks_of_critical_path(&inst, &order, &path).is_empty());
    }

    #[test]
    fn test_long_block_boundary_swaps() {
        let block = Block {
            machine: 2,
            first: 1,
            last: 4,
        };
        assert_eq!(block.len(), 4);
        assert_eq!(
            neighbors(&block),
            vec![Swap::new(2, 1, 2), Swap::new(2, 3, 4)]
        );
    }

    #[test]
    fn test_three_block_swaps_overlap_middle() {
        let block = Block {
            machine: 0,
            first: 0,
            last: 2,
        };
        assert_eq!(
            neighbors(&block),
            vec![Swap::new(0, 0, 1), Swap::new(0, 1, 2)]
        );
    }

    #[test]
    fn test_swap_normalized_and_reversible() {
        let swap = Swap::new(1, 3, 1);
        assert_eq!((swap.first, swap.second), (1, 3));

        let inst = three_by_three();
        let order = ResourceOrder::from_machine_orders(
            (0..3).map(|m| inst.operations_on(m)).collect(),
        );
        let swap = Swap::new(0, 0, 2);
        let candidate = swap.applied_to(&order);
        assert_ne!(candidate, order);
        assert_eq!(swap.applied_to(&candidate), order);
    }

    #[test]
    fn test_swaps_keep_permutation() {
        let inst = three_by_three();
        let order = ResourceOrder::from_machine_orders(
            (0..3).map(|m| inst.operations_on(m)).collect(),
        );
        let schedule = simulate(&inst, &order).unwrap();
        for swap in neighborhood(&inst, &order, &schedule) {
            assert!(swap.applied_to(&order).validate(&inst).is_ok());
        }
    }
}
