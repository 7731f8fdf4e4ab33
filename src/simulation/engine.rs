//! Worker-pool execution engine.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::{bounded, unbounded};
use thiserror::Error;
use tracing::{debug, debug_span, trace, warn};

use crate::random::SeedSequence;
use crate::simulation::trial::{TrialError, TrialFunction};
use crate::types::config::SimulationConfig;
use crate::types::input::TrialInput;

/// Error type for simulation.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Run {run} aborted: {source}")]
    Trial { run: usize, source: TrialError },

    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(#[from] io::Error),

    #[error("Failed to create thread pool: {0}")]
    ThreadPool(String),

    #[error("Run ended with {received} of {expected} outcomes")]
    Incomplete { expected: usize, received: usize },
}

/// One unit of work: "run one trial".
#[derive(Debug, Clone, Copy)]
struct WorkUnit {
    trial: usize,
}

/// Runs a fixed number of trials across a fixed-size worker pool.
///
/// A producer thread feeds one work unit per trial into a bounded queue,
/// `workers` threads each pull units and publish outcomes into an unbounded
/// sink, and the calling thread collects until it has every outcome. All
/// threads are joined before `execute` returns.
///
/// Outcomes come back in completion order, not submission order.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    iterations: usize,
    workers: usize,
    seeds: SeedSequence,
    run: usize,
}

impl Engine {
    /// Create an engine; zero counts are replaced with the defaults.
    pub fn new(iterations: usize, workers: usize) -> Self {
        Self::from_config(&SimulationConfig::new(iterations, workers))
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        let config = config.normalized();
        Self {
            iterations: config.iterations,
            workers: config.workers,
            seeds: SeedSequence::new(config.seed),
            run: 0,
        }
    }

    /// Use `seeds` for the per-worker random streams.
    pub fn with_seeds(mut self, seeds: SeedSequence) -> Self {
        self.seeds = seeds;
        self
    }

    /// Tag errors and logs from this engine with a run index.
    pub fn with_run_index(mut self, run: usize) -> Self {
        self.run = run;
        self
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every trial against `input` and return the raw outcomes.
    ///
    /// A NaN or infinite outcome counts as a trial error
    /// ([`TrialError::NonFinite`]).
    ///
    /// The first trial error stops the producer, lets in-flight trials
    /// finish, and is returned once all workers have exited. A panicking
    /// trial function resumes its panic on the calling thread.
    pub fn execute<T>(&self, input: &TrialInput, runner: &T) -> Result<Vec<f64>, SimulationError>
    where
        T: TrialFunction + ?Sized,
    {
        let iterations = self.iterations;
        let _span = debug_span!("engine", run = self.run, iterations, workers = self.workers).entered();
        debug!("starting worker pool");

        let (task_tx, task_rx) = bounded::<WorkUnit>(self.workers);
        let (result_tx, result_rx) = unbounded::<Result<f64, TrialError>>();
        let abort = AtomicBool::new(false);
        let abort = &abort;

        let (outcomes, failure) = thread::scope(move |scope| {
            let mut handles = Vec::with_capacity(self.workers + 1);
            for worker in 0..self.workers {
                let tasks = task_rx.clone();
                let results = result_tx.clone();
                let mut rng = self.seeds.rng(worker);

                let handle = thread::Builder::new()
                    .name(format!("trial-worker-{worker}"))
                    .spawn_scoped(scope, move || {
                        for unit in tasks.iter() {
                            if abort.load(Ordering::Relaxed) {
                                break;
                            }
                            trace!(worker, trial = unit.trial, "running trial");
                            let outcome = runner.trial(input, &mut rng).and_then(|value| {
                                if value.is_finite() {
                                    Ok(value)
                                } else {
                                    Err(TrialError::NonFinite(value))
                                }
                            });
                            if outcome.is_err() {
                                abort.store(true, Ordering::Relaxed);
                            }
                            if results.send(outcome).is_err() {
                                break;
                            }
                        }
                    })?;
                handles.push(handle);
            }
            // Workers hold the only remaining handles
            drop(task_rx);
            drop(result_tx);

            let producer = thread::Builder::new()
                .name("trial-producer".to_string())
                .spawn_scoped(scope, move || {
                    for trial in 0..iterations {
                        if abort.load(Ordering::Relaxed) {
                            break;
                        }
                        if task_tx.send(WorkUnit { trial }).is_err() {
                            break;
                        }
                    }
                })?;
            handles.push(producer);

            let mut outcomes = Vec::with_capacity(iterations);
            let mut failure = None;
            while outcomes.len() < iterations {
                match result_rx.recv() {
                    Ok(Ok(value)) => outcomes.push(value),
                    Ok(Err(err)) => {
                        warn!(run = self.run, error = %err, "trial failed, aborting run");
                        abort.store(true, Ordering::Relaxed);
                        failure = Some(err);
                        break;
                    }
                    // Every worker is gone
                    Err(_) => break,
                }
            }

            // Joining here keeps the trial's own panic payload
            let mut panicked = None;
            for handle in handles {
                if let Err(payload) = handle.join() {
                    panicked.get_or_insert(payload);
                }
            }
            if let Some(payload) = panicked {
                std::panic::resume_unwind(payload);
            }

            Ok::<_, SimulationError>((outcomes, failure))
        })?;

        if let Some(source) = failure {
            return Err(SimulationError::Trial { run: self.run, source });
        }
        if outcomes.len() != iterations {
            return Err(SimulationError::Incomplete {
                expected: iterations,
                received: outcomes.len(),
            });
        }

        debug!(outcomes = outcomes.len(), "worker pool finished");
        Ok(outcomes)
    }
}

/// Run `iterations` trials of `runner` against `input` on `workers` threads.
///
/// Zero counts are replaced with [`DEFAULT_ITERATIONS`](crate::types::DEFAULT_ITERATIONS)
/// and [`DEFAULT_WORKERS`](crate::types::DEFAULT_WORKERS). Workers are seeded from OS entropy.
pub fn execute<T>(
    input: &TrialInput,
    iterations: usize,
    workers: usize,
    runner: &T,
) -> Result<Vec<f64>, SimulationError>
where
    T: TrialFunction + ?Sized,
{
    Engine::new(iterations, workers).execute(input, runner)
}
