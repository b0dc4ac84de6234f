//! Named priority rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{rules, RuleEngine};
use crate::error::JobShopError;

/// The classic greedy priority rules for job-shop dispatching.
///
/// `EST_*` variants first keep only the candidates that can start earliest,
/// then break ties with the named rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityRule {
    /// Shortest processing time.
    #[default]
    Spt,
    /// Longest processing time.
    Lpt,
    /// Shortest remaining processing time.
    Srpt,
    /// Longest remaining processing time.
    Lrpt,
    /// Earliest start, then shortest processing time.
    EstSpt,
    /// Earliest start, then longest remaining processing time.
    EstLrpt,
}

impl PriorityRule {
    /// Every rule, in declaration order.
    pub const ALL: [PriorityRule; 6] = [
        PriorityRule::Spt,
        PriorityRule::Lpt,
        PriorityRule::Srpt,
        PriorityRule::Lrpt,
        PriorityRule::EstSpt,
        PriorityRule::EstLrpt,
    ];

    /// Canonical name (`SPT`, `EST_LRPT`, ...).
    pub fn name(self) -> &'static str {
        match self {
            PriorityRule::Spt => "SPT",
            PriorityRule::Lpt => "LPT",
            PriorityRule::Srpt => "SRPT",
            PriorityRule::Lrpt => "LRPT",
            PriorityRule::EstSpt => "EST_SPT",
            PriorityRule::EstLrpt => "EST_LRPT",
        }
    }

    /// The rule engine implementing this rule.
    pub fn engine(self) -> RuleEngine {
        let engine = RuleEngine::new();
        match self {
            PriorityRule::Spt => engine.with_rule(rules::Spt),
            PriorityRule::Lpt => engine.with_rule(rules::Lpt),
            PriorityRule::Srpt => engine.with_rule(rules::Srpt),
            PriorityRule::Lrpt => engine.with_rule(rules::Lrpt),
            PriorityRule::EstSpt => engine.with_rule(rules::Est).with_tie_breaker(rules::Spt),
            PriorityRule::EstLrpt => engine.with_rule(rules::Est).with_tie_breaker(rules::Lrpt),
        }
    }
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityRule {
    type Err = JobShopError;

    /// Parses a rule name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriorityRule::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| JobShopError::UnknownRule(s.to_string()))
    }
}
