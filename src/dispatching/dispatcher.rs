//! Greedy list scheduler.
//!
//! # Algorithm
//! 1. The dispatchable set holds the next undispatched operation of each job
//! 2. The rule engine picks one candidate (ties → lowest job index)
//! 3. The pick is appended to its machine's list and the dispatch state is
//!    advanced; the job's next operation becomes dispatchable
//! 4. Repeat until every operation is dispatched
//!
//! Operations are appended in an order compatible with job precedence, so
//! the result is always feasible.
//!
//! # Complexity
//! O(J·T · J·R) for R rule layers.

use super::{DispatchContext, PriorityRule, RuleEngine};
use crate::encoding::ResourceOrder;
use crate::models::{Instance, Operation};

/// Builds a resource order with one of the named priority rules.
pub fn dispatch(instance: &Instance, rule: PriorityRule) -> ResourceOrder {
    dispatch_with(instance, &rule.engine())
}

/// Builds a resource order with an arbitrary rule engine.
pub fn dispatch_with(instance: &Instance, engine: &RuleEngine) -> ResourceOrder {
    let num_jobs = instance.num_jobs();
    let num_tasks = instance.num_tasks();

    let mut context = DispatchContext::new(instance);
    let mut next_task = vec![0usize; num_jobs];
    let mut order = ResourceOrder::empty(instance);
    let mut candidates: Vec<Operation> = Vec::with_capacity(num_jobs);

    loop {
        candidates.clear();
        candidates.extend(
            (0..num_jobs)
                .filter(|&job| next_task[job] < num_tasks)
                .map(|job| Operation::new(job, next_task[job])),
        );

        let Some(idx) = engine.select_best(instance, &candidates, &context) else {
            break;
        };
        let op = candidates[idx];
        context.record(instance, op);
        order.push(instance.machine_of(op), op);
        next_task[op.job] += 1;
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use crate::testing::{ft06, three_by_three, two_by_two};
    use crate::validation::validate_schedule;

    fn op(job: usize, task: usize) -> Operation {
        Operation::new(job, task)
    }

    #[test]
    fn test_spt_two_by_two() {
        let inst = two_by_two();
        let order = dispatch(&inst, PriorityRule::Spt);
        assert_eq!(order.machine(0), &[op(0, 0), op(1, 1)]);
        assert_eq!(order.machine(1), &[op(1, 0), op(0, 1)]);
        assert_eq!(simulate(&inst, &order).unwrap().makespan(), 7);
    }

    #[test]
    fn test_lpt_two_by_two() {
        // (0,0)=3 beats (1,0)=2; then (0,1)=2 and (1,0)=2 tie → job 0 first.
        let inst = two_by_two();
        let order = dispatch(&inst, PriorityRule::Lpt);
        assert_eq!(order.machine(0), &[op(0, 0), op(1, 1)]);
        assert_eq!(order.machine(1), &[op(0, 1), op(1, 0)]);
        assert_eq!(simulate(&inst, &order).unwrap().makespan(), 11);
    }

    #[test]
    fn test_est_lrpt_two_by_two() {
        let inst = two_by_two();
        let order = dispatch(&inst, PriorityRule::EstLrpt);
        assert_eq!(order.machine(0), &[op(0, 0), op(1, 1)]);
        assert_eq!(order.machine(1), &[op(1, 0), op(0, 1)]);
    }

    #[test]
    fn test_all_rules_feasible() {
        for inst in [two_by_two(), three_by_three(), ft06()] {
            for rule in PriorityRule::ALL {
                let order = dispatch(&inst, rule);
                let schedule = simulate(&inst, &order)
                    .unwrap_or_else(|e| panic!("{rule} infeasible: {e}"));
                assert!(validate_schedule(&inst, &schedule).is_ok());
                assert!(schedule.makespan() >= inst.lower_bound());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let inst = ft06();
        for rule in PriorityRule::ALL {
            assert_eq!(dispatch(&inst, rule), dispatch(&inst, rule));
        }
    }

    #[test]
    fn test_empty_engine_prefers_lowest_job() {
        // No rules: lowest job index always wins, so job 0 runs first entirely.
        let inst = two_by_two();
        let order = dispatch_with(&inst, &RuleEngine::new());
        assert_eq!(order.machine(0), &[op(0, 0), op(1, 1)]);
        assert_eq!(order.machine(1), &[op(0, 1), op(1, 0)]);
    }
}
