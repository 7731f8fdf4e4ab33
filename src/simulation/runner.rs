//! Simulation façade: single runs and concurrent batches.

use rayon::prelude::*;
use tracing::info;

use crate::random::SeedSequence;
use crate::simulation::engine::{Engine, SimulationError};
use crate::simulation::trial::TrialFunction;
use crate::statistics::summarize;
use crate::types::config::SimulationConfig;
use crate::types::input::TrialInput;
use crate::types::result::{BatchSummary, Summary};

/// A configured Monte Carlo simulation.
///
/// Holds the iteration count, the worker count and the trial function.
/// It can be reused for any number of `run` / `run_multiple` calls.
pub struct Simulation<T> {
    config: SimulationConfig,
    runner: T,
}

impl<T: TrialFunction> Simulation<T> {
    /// Create a simulation; zero counts are replaced with the defaults.
    pub fn new(iterations: usize, workers: usize, runner: T) -> Self {
        Self::with_config(SimulationConfig::new(iterations, workers), runner)
    }

    pub fn with_config(config: SimulationConfig, runner: T) -> Self {
        Self {
            config: config.normalized(),
            runner,
        }
    }

    /// The normalized configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.config.workers
    }

    pub fn runner(&self) -> &T {
        &self.runner
    }

    /// Run every trial against `input` and summarize the outcomes.
    pub fn run(&self, input: TrialInput) -> Result<Summary, SimulationError> {
        self.run_indexed(0, input)
    }

    /// Run one simulation per input, all concurrently.
    ///
    /// The result is index-aligned with `inputs` regardless of completion
    /// order. A failing run is reported at its index and does not cancel
    /// the others. Each run gets its own worker pool.
    pub fn run_multiple(&self, inputs: Vec<TrialInput>) -> Result<BatchSummary, SimulationError> {
        if inputs.is_empty() {
            return Ok(BatchSummary { runs: Vec::new() });
        }

        let n_runs = inputs.len();
        info!(runs = n_runs, iterations = self.iterations(), workers = self.workers(), "starting batch");

        // One thread per run so every run makes progress at once
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_runs)
            .thread_name(|idx| format!("simulation-run-{idx}"))
            .build()
            .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;

        let runs: Vec<Result<Summary, SimulationError>> = pool.install(|| {
            inputs
                .into_par_iter()
                .enumerate()
                .map(|(run, input)| self.run_indexed(run, input))
                .collect()
        });

        let batch = BatchSummary { runs };
        info!(
            runs = n_runs,
            failed = batch.failures().count(),
            "batch finished"
        );
        Ok(batch)
    }

    fn run_indexed(&self, run: usize, input: TrialInput) -> Result<Summary, SimulationError> {
        let outcomes = Engine::from_config(&self.config)
            .with_seeds(SeedSequence::new(self.config.seed).for_run(run))
            .with_run_index(run)
            .execute(&input, &self.runner)?;
        let statistics = summarize(&outcomes);

        Ok(Summary {
            outcomes,
            statistics,
            input,
        })
    }
}
