//! Run result types.

use crate::simulation::SimulationError;
use crate::types::input::TrialInput;

/// Summary statistics over one run's outcomes.
///
/// `std_dev` is the *population* standard deviation (divisor = count).
/// An empty sample yields all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Statistics {
    /// Population variance (`std_dev` squared).
    #[inline]
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

/// Result of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Raw outcomes in completion order (not submission order)
    pub outcomes: Vec<f64>,

    /// Statistics over `outcomes`
    pub statistics: Statistics,

    /// The input the run was executed against
    pub input: TrialInput,
}

/// Results of a batch, index-aligned with the inputs it was run against.
///
/// A failed run is reported at its own index; the other runs are unaffected.
#[derive(Debug)]
pub struct BatchSummary {
    pub runs: Vec<Result<Summary, SimulationError>>,
}

impl BatchSummary {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Result<Summary, SimulationError>> {
        self.runs.iter()
    }

    /// Successful runs with their input index.
    pub fn successes(&self) -> impl Iterator<Item = (usize, &Summary)> {
        self.runs
            .iter()
            .enumerate()
            .filter_map(|(idx, run)| run.as_ref().ok().map(|s| (idx, s)))
    }

    /// Failed runs with their input index.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &SimulationError)> {
        self.runs
            .iter()
            .enumerate()
            .filter_map(|(idx, run)| run.as_ref().err().map(|e| (idx, e)))
    }

    /// All summaries in input order, or the first failure.
    pub fn into_summaries(self) -> Result<Vec<Summary>, SimulationError> {
        self.runs.into_iter().collect()
    }
}
