//! Job-shop scheduling engine.
//!
//! Evaluates and improves job-shop schedules: a solution is encoded as the
//! processing order on every machine, turned into start times by simulating
//! the disjunctive graph, and improved by local search over the blocks of
//! its critical path.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Instance`, `Operation`, `Schedule`
//! - **`encoding`**: Solution encodings: `ResourceOrder`, `JobNumbers`
//! - **`simulation`**: Resource order → schedule, with cycle detection
//! - **`neighborhood`**: Critical blocks and their boundary swaps
//! - **`dispatching`**: Priority rules and the greedy list scheduler
//! - **`solvers`**: Greedy, descent, tabu, and baseline solvers
//! - **`result`**: `SolveOutcome`, `ExitCause`, `SearchStatistics`
//! - **`kpi`**: Schedule quality metrics
//! - **`validation`**: Integrity checks for instances, encodings, and schedules
//!
//! # Example
//!
//! ```
//! use u_jobshop::deadline::Deadline;
//! use u_jobshop::models::Instance;
//! use u_jobshop::solvers::{Solver, SolverConfig};
//!
//! let instance = Instance::new(2, vec![vec![(0, 3), (1, 2)], vec![(1, 2), (0, 4)]]).unwrap();
//! let solver: SolverConfig = "EST_LRPT_Tabu".parse().unwrap();
//! let outcome = solver.solve(&instance, Deadline::none()).unwrap();
//! assert_eq!(outcome.makespan(), Some(7));
//! ```
//!
//! # Logging
//!
//! Solvers emit `tracing` events: `debug` for each move and `info` when a run
//! ends. Installing a subscriber is left to the application.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Nowicki & Smutnicki (1996), "A fast taboo search algorithm for the job
//!   shop problem"
//! - Brucker (2007), "Scheduling Algorithms"

pub mod deadline;
pub mod dispatching;
pub mod encoding;
pub mod error;
pub mod kpi;
pub mod models;
pub mod neighborhood;
pub mod result;
pub mod simulation;
pub mod solvers;
pub mod validation;

#[cfg(test)]
mod testing;

pub use error::{JobShopError, Result};
