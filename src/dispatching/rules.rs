//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Processing time**: SPT, LPT
//! - **Remaining work**: SRPT, LRPT
//! - **Start time**: EST
//!
//! # Score Convention
//! All rules return lower scores for higher priority operations.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::{Instance, Operation};

// ======================== Processing time ========================

/// Shortest Processing Time.
///
/// Prioritizes the candidate operation with the shortest duration.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, instance: &Instance, op: Operation, _context: &DispatchContext) -> RuleScore {
        instance.duration_of(op)
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, instance: &Instance, op: Operation, _context: &DispatchContext) -> RuleScore {
        -instance.duration_of(op)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

// ======================== Remaining work ========================

/// Shortest Remaining Processing Time.
///
/// Prioritizes jobs closest to completion. Remaining time counts every
/// operation of the job not yet dispatched, the candidate included.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, _instance: &Instance, op: Operation, context: &DispatchContext) -> RuleScore {
        context.remaining_work(op.job)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// Longest Remaining Processing Time.
///
/// Prioritizes the job with the most work left. Usually the strongest
/// simple rule for makespan.
#[derive(Debug, Clone, Copy)]
pub struct Lrpt;

impl DispatchingRule for Lrpt {
    fn name(&self) -> &'static str {
        "LRPT"
    }

    fn evaluate(&self, _instance: &Instance, op: Operation, context: &DispatchContext) -> RuleScore {
        -context.remaining_work(op.job)
    }

    fn description(&self) -> &'static str {
        "Longest Remaining Processing Time"
    }
}

// ======================== Start time ========================

/// Earliest Start Time.
///
/// Scores each candidate by the earliest time it could start given the
/// operations dispatched so far. Used as the first layer of the `EST_*`
/// compositions, which restrict the choice to operations that can start
/// first and let a second rule decide among them.
#[derive(Debug, Clone, Copy)]
pub struct Est;

impl DispatchingRule for Est {
    fn name(&self) -> &'static str {
        "EST"
    }

    fn evaluate(&self, instance: &Instance, op: Operation, context: &DispatchContext) -> RuleScore {
        context.earliest_start(instance, op)
    }

    fn description(&self) -> &'static str {
        "Earliest Start Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::two_by_two;

    #[test]
    fn test_processing_time_rules() {
        let inst = two_by_two();
        let ctx = DispatchContext::new(&inst);
        let (a, b) = (Operation::new(0, 0), Operation::new(1, 0));

        assert_eq!(Spt.evaluate(&inst, a, &ctx), 3);
        assert_eq!(Spt.evaluate(&inst, b, &ctx), 2);
        assert!(Lpt.evaluate(&inst, a, &ctx) < Lpt.evaluate(&inst, b, &ctx));
    }

    #[test]
    fn test_remaining_work_rules() {
        let inst = two_by_two();
        let mut ctx = DispatchContext::new(&inst);
        let (a, b) = (Operation::new(0, 0), Operation::new(1, 0));

        // job 0 has 5 left, job 1 has 6
        assert!(Srpt.evaluate(&inst, a, &ctx) < Srpt.evaluate(&inst, b, &ctx));
        assert!(Lrpt.evaluate(&inst, b, &ctx) < Lrpt.evaluate(&inst, a, &ctx));

        ctx.record(&inst, b);
        // job 1 now has 4 left
        assert_eq!(Srpt.evaluate(&inst, Operation::new(1, 1), &ctx), 4);
        assert_eq!(Lrpt.evaluate(&inst, a, &ctx), -5);
    }

    #[test]
    fn test_est_rule() {
        let inst = two_by_two();
        let mut ctx = DispatchContext::new(&inst);
        ctx.record(&inst, Operation::new(0, 0));

        // (0,1) waits for its job; (1,0) is on an idle machine.
        assert_eq!(Est.evaluate(&inst, Operation::new(0, 1), &ctx), 3);
        assert_eq!(Est.evaluate(&inst, Operation::new(1, 0), &ctx), 0);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Lrpt.description(), "Longest Remaining Processing Time");
        assert_eq!(Est.name(), "EST");
    }
}
