//! Error types.
//!
//! Only [`JobShopError::Infeasible`] is an expected search outcome: drivers
//! discard the offending candidate and continue. Every other variant is a
//! contract violation and propagates to the caller.

use thiserror::Error;

/// Errors raised by the scheduling engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobShopError {
    /// Job precedence and machine order form a cycle; no timing exists.
    #[error("infeasible resource order: only {scheduled} of {total} operations could be ordered")]
    Infeasible { scheduled: usize, total: usize },

    /// A machine's ordering is not a permutation of that machine's operations.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The instance description is malformed.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// No solver configuration matches the given name.
    #[error("unknown solver: {0}")]
    UnknownSolver(String),

    /// No dispatching rule matches the given name.
    #[error("unknown priority rule: {0}")]
    UnknownRule(String),
}

impl JobShopError {
    /// Whether a search driver may drop the candidate and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, JobShopError::Infeasible { .. })
    }
}

pub type Result<T> = std::result::Result<T, JobShopError>;
