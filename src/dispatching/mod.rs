//! Greedy dispatching rules and list scheduler.
//!
//! Builds a resource order by repeatedly picking one operation among the
//! dispatchable ones (the next undone operation of each job) and appending
//! it to its machine. The pick is driven by a [`RuleEngine`] composed of
//! [`DispatchingRule`]s; [`PriorityRule`] names the classic compositions.
//!
//! # Usage
//!
//! ```
//! use u_jobshop::dispatching::{dispatch, dispatch_with, rules, PriorityRule, RuleEngine};
//! use u_jobshop::models::Instance;
//!
//! let instance = Instance::new(2, vec![vec![(0, 3), (1, 2)], vec![(1, 2), (0, 4)]]).unwrap();
//! let spt = dispatch(&instance, PriorityRule::Spt);
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Est)
//!     .with_tie_breaker(rules::Lrpt);
//! assert_eq!(dispatch_with(&instance, &engine), dispatch(&instance, PriorityRule::EstLrpt));
//! # let _ = spt;
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod dispatcher;
mod engine;
mod priority;
pub mod rules;

pub use context::DispatchContext;
pub use dispatcher::{dispatch, dispatch_with};
pub use engine::RuleEngine;
pub use priority::PriorityRule;

use crate::models::{Instance, Operation};
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates the priority of a candidate operation.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for operations that should be dispatched first.
///
/// # Reference
/// Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "EST").
    fn name(&self) -> &'static str;

    /// Evaluates `op` given the dispatch state so far.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, instance: &Instance, op: Operation, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
