//! Job-shop domain models.
//!
//! Provides the problem description and the simulated solution. Both are
//! read-only from the search's point of view: the search mutates only the
//! encoding (see [`crate::encoding`]).
//!
//! | Type | Role |
//! |------|------|
//! | `Operation` | Identity of one job step (job, task) |
//! | `Instance` | Jobs × operations × machines × durations |
//! | `Schedule` | Start/end times derived from an encoding |

mod instance;
mod operation;
mod schedule;

pub use instance::{Instance, OperationSpec};
pub use operation::Operation;
pub use schedule::Schedule;
