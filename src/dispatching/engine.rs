//! Rule engine for multi-layer dispatching.
//!
//! Applies rules in sequence: the second rule is consulted only among
//! candidates tied on the first, and so on. Candidates still tied after the
//! last rule keep their input order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::{Instance, Operation};

/// A composable rule engine for operation prioritization.
///
/// # Example
/// ```
/// use u_jobshop::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Est)
///     .with_tie_breaker(rules::Spt);
/// assert_eq!(engine.rule_names(), vec!["EST", "SPT"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// An empty engine ties every candidate, so the first one is picked.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// On a full tie the earliest candidate wins.
    pub fn select_best(
        &self,
        instance: &Instance,
        candidates: &[Operation],
        context: &DispatchContext,
    ) -> Option<usize> {
        let mut best: Option<(usize, Vec<RuleScore>)> = None;
        for (idx, &op) in candidates.iter().enumerate() {
            let scores = self.evaluate(instance, op, context);
            let better = match &best {
                None => true,
                Some((_, best_scores)) => scores.cmp(best_scores) == Ordering::Less,
            };
            if better {
                best = Some((idx, scores));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Evaluates a single candidate and returns scores from each rule.
    pub fn evaluate(
        &self,
        instance: &Instance,
        op: Operation,
        context: &DispatchContext,
    ) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(instance, op, context))
            .collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn three_candidates() -> (Instance, Vec<Operation>) {
        // durations 4, 2, 2; remaining 4, 2, 7
        let inst = Instance::new(
            3,
            vec![
                vec![(0, 4), (1, 0)],
                vec![(1, 2), (1, 0)],
                vec![(2, 2), (0, 5)],
            ],
        )
        .unwrap();
        let candidates = (0..3).map(|j| Operation::new(j, 0)).collect();
        (inst, candidates)
    }

    #[test]
    fn test_lpt_selects_longest() {
        let (inst, cands) = three_candidates();
        let ctx = DispatchContext::new(&inst);
        let engine = RuleEngine::new().with_rule(rules::Lpt);

        assert_eq!(engine.select_best(&inst, &cands, &ctx), Some(0));
    }

    #[test]
    fn test_first_minimum_wins() {
        let (inst, cands) = three_candidates();
        let ctx = DispatchContext::new(&inst);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        // candidates 1 and 2 tie on SPT
        assert_eq!(engine.select_best(&inst, &cands, &ctx), Some(1));
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let (inst, cands) = three_candidates();
        let ctx = DispatchContext::new(&inst);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Lrpt);

        // SPT ties 1 and 2 → LRPT picks job 2 (7 left vs 2)
        assert_eq!(engine.select_best(&inst, &cands, &ctx), Some(2));
    }

    #[test]
    fn test_empty_candidates() {
        let (inst, _) = three_candidates();
        let ctx = DispatchContext::new(&inst);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.select_best(&inst, &[], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let (inst, cands) = three_candidates();
        let ctx = DispatchContext::new(&inst);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_rule(rules::Srpt);

        assert_eq!(engine.evaluate(&inst, cands[2], &ctx), vec![2, 7]);
        assert_eq!(format!("{engine:?}"), "RuleEngine { rules: [\"SPT\", \"SRPT\"] }");
    }
}
