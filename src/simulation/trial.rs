//! The trial function capability.

use thiserror::Error;

use crate::random::TrialRng;
use crate::types::input::TrialInput;

/// Errors a trial function can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrialError {
    #[error("Trial failed: {0}")]
    Failed(String),

    #[error("Trial produced a non-finite outcome: {0}")]
    NonFinite(f64),
}

/// One repetition of a simulation.
///
/// Implementations read the shared input and draw from the worker's own
/// random source. Any plain closure `Fn(&TrialInput, &mut TrialRng) -> f64`
/// is a `TrialFunction`; wrap closures returning `Result` in [`Fallible`].
pub trait TrialFunction: Send + Sync {
    fn trial(&self, input: &TrialInput, rng: &mut TrialRng) -> Result<f64, TrialError>;
}

impl<F> TrialFunction for F
where
    F: Fn(&TrialInput, &mut TrialRng) -> f64 + Send + Sync,
{
    #[inline]
    fn trial(&self, input: &TrialInput, rng: &mut TrialRng) -> Result<f64, TrialError> {
        Ok(self(input, rng))
    }
}

/// Adapter for trial closures that can fail.
///
/// The first error aborts the run it occurred in.
pub struct Fallible<F>(pub F);

impl<F> TrialFunction for Fallible<F>
where
    F: Fn(&TrialInput, &mut TrialRng) -> Result<f64, TrialError> + Send + Sync,
{
    #[inline]
    fn trial(&self, input: &TrialInput, rng: &mut TrialRng) -> Result<f64, TrialError> {
        (self.0)(input, rng)
    }
}
