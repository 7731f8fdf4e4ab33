//! Parallel Monte Carlo trial engine.
//!
//! Runs a user-supplied trial function a fixed number of times across a
//! bounded worker pool, collects every outcome and summarizes them
//! (mean, population standard deviation, min, max). Several independent
//! runs, one per input set, can be executed concurrently.
//!
//! ```no_run
//! use montecarlo_rs::{Simulation, TrialInput, TrialRng};
//!
//! let sim = Simulation::new(100_000, 200, |_: &TrialInput, rng: &mut TrialRng| {
//!     let x = rng.uniform(0.0, 1.0);
//!     let y = rng.uniform(0.0, 1.0);
//!     if x * x + y * y <= 1.0 { 1.0 } else { 0.0 }
//! });
//! let summary = sim.run(TrialInput::new()).unwrap();
//! println!("pi ~ {}", 4.0 * summary.statistics.mean);
//! ```

pub mod random;
pub mod simulation;
pub mod statistics;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use random::{SeedSequence, TrialRng};
pub use simulation::{execute, Engine, Fallible, Simulation, SimulationError, TrialError, TrialFunction};
pub use statistics::{summarize, StatsAccumulator};
pub use types::{
    BatchSummary, SimulationConfig, Statistics, Summary, TrialInput, DEFAULT_ITERATIONS,
    DEFAULT_WORKERS,
};
