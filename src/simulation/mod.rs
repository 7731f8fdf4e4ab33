//! Execution engine, trial capability and simulation façade.

pub mod engine;
pub mod runner;
pub mod trial;

pub use engine::{execute, Engine, SimulationError};
pub use runner::Simulation;
pub use trial::{Fallible, TrialError, TrialFunction};
