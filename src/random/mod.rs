//! Injectable randomness for trial functions.

pub mod numgen;

pub use numgen::{SeedSequence, TrialRng};
