//! Wall-clock deadline for anytime solvers.
//!
//! A [`Deadline`] is an absolute point in time. Solvers query it at every
//! iteration boundary and return their best solution once it has passed.
//! An evaluation already in flight is allowed to finish, so the deadline is
//! a soft limit, not a preemption guarantee.

use std::time::{Duration, Instant};

/// Absolute wall-clock limit for a solver run.
///
/// `Deadline::none()` never expires; the solver then stops only on its own
/// termination criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    pub fn none() -> Self {
        Self { at: None }
    }

    /// A deadline at the given instant.
    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    /// A deadline `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self::at(Instant::now() + limit)
    }

    /// The instant this deadline expires, if any.
    #[inline]
    pub fn instant(&self) -> Option<Instant> {
        self.at
    }

    /// Whether the deadline has passed.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }

    /// Time left before expiry. `None` for an unbounded deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
