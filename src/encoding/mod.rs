//! Solution encodings.
//!
//! Local search works on an encoding, never on a schedule: a candidate is a
//! cloned and modified encoding that is then re-simulated.
//!
//! | Encoding | Meaning | Feasibility |
//! |----------|---------|-------------|
//! | `ResourceOrder` | Operation order on each machine | May contain cycles |
//! | `JobNumbers` | Global operation sequence by job index | Always feasible |
//!
//! # Reference
//! Cheng, Gen & Tsujimura (1996), "A tutorial survey of job-shop scheduling
//! problems using genetic algorithms, part I: representation"

mod job_numbers;
mod resource_order;

pub use job_numbers::JobNumbers;
pub use resource_order::ResourceOrder;
