//! Named solver configurations.
//!
//! A [`SolverConfig`] selects one solver and its parameters. It can be
//! parsed from the conventional solver names:
//!
//! | Name | Solver |
//! |------|--------|
//! | `basic` | [`BasicSolver`] |
//! | `random` | [`RandomSolver`] with defaults |
//! | `SPT`, `LPT`, `SRPT`, `LRPT`, `EST_SPT`, `EST_LRPT` | [`GreedySolver`] |
//! | `<RULE>_Descent` | [`DescentSolver`] seeded by `<RULE>` |
//! | `<RULE>_Tabu` or `<RULE>_Taboo` | [`TabuSolver`] seeded by `<RULE>` |
//!
//! or deserialized with serde, which also sets the parameters:
//!
//! ```json
//! { "kind": "tabu", "initial_rule": "EST_LRPT", "max_iterations": 500, "tenure": 8 }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{BasicSolver, DescentSolver, GreedySolver, RandomSolver, Solver, TabuSolver};
use crate::deadline::Deadline;
use crate::dispatching::PriorityRule;
use crate::error::{JobShopError, Result};
use crate::models::Instance;
use crate::result::SolveOutcome;

/// One solver with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolverConfig {
    Basic,
    Random(RandomSolver),
    Greedy(GreedySolver),
    Descent(DescentSolver),
    Tabu(TabuSolver),
}

impl SolverConfig {
    /// Names accepted by [`FromStr`] for the default parameters of every
    /// solver kind.
    pub fn known_names() -> Vec<String> {
        let mut names = vec!["basic".to_string(), "random".to_string()];
        names.extend(PriorityRule::ALL.iter().map(|r| r.to_string()));
        names.extend(PriorityRule::ALL.iter().map(|r| format!("{r}_Descent")));
        names.extend(PriorityRule::ALL.iter().map(|r| format!("{r}_Tabu")));
        names
    }

    fn solver(&self) -> &dyn Solver {
        match self {
            SolverConfig::Basic => &BasicSolver,
            SolverConfig::Random(s) => s,
            SolverConfig::Greedy(s) => s,
            SolverConfig::Descent(s) => s,
            SolverConfig::Tabu(s) => s,
        }
    }
}

impl Solver for SolverConfig {
    fn name(&self) -> String {
        self.solver().name()
    }

    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> Result<SolveOutcome<'a>> {
        self.solver().solve(instance, deadline)
    }
}

impl fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for SolverConfig {
    type Err = JobShopError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || JobShopError::UnknownSolver(s.to_string());

        if s.eq_ignore_ascii_case("basic") {
            return Ok(SolverConfig::Basic);
        }
        if s.eq_ignore_ascii_case("random") {
            return Ok(SolverConfig::Random(RandomSolver::default()));
        }
        if let Some(rule) = strip_suffix_ignore_case(s, "_Descent") {
            let rule = rule.parse().map_err(|_| unknown())?;
            return Ok(SolverConfig::Descent(
                DescentSolver::new().with_initial_rule(rule),
            ));
        }
        if let Some(rule) = strip_suffix_ignore_case(s, "_Tabu")
            .or_else(|| strip_suffix_ignore_case(s, "_Taboo"))
        {
            let rule = rule.parse().map_err(|_| unknown())?;
            return Ok(SolverConfig::Tabu(TabuSolver::new().with_initial_rule(rule)));
        }
        s.parse::<PriorityRule>()
            .map(|rule| SolverConfig::Greedy(GreedySolver::new(rule)))
            .map_err(|_| unknown())
    }
}

fn strip_suffix_ignore_case<'s>(s: &'s str, suffix: &str) -> Option<&'s str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (head, tail) = (s.get(..split)?, s.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
