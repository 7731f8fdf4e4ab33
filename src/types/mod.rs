//! Core types for the simulation engine.

pub mod config;
pub mod input;
pub mod result;

pub use config::{SimulationConfig, DEFAULT_ITERATIONS, DEFAULT_WORKERS};
pub use input::TrialInput;
pub use result::{BatchSummary, Statistics, Summary};
