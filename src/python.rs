//! Python bindings.
//!
//! A Python callable `f(dict[str, float]) -> float` stands in for the trial
//! function. The GIL is released while the engine runs and reacquired by
//! each trial, so Python trials serialize on the GIL while the pool and
//! statistics stay in Rust.

use std::collections::HashMap;

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::random::TrialRng;
use crate::simulation::{Simulation, SimulationError, TrialError, TrialFunction};
use crate::statistics;
use crate::types::{SimulationConfig, Summary, TrialInput};

fn to_py_err(e: SimulationError) -> PyErr {
    PyErr::new::<PyRuntimeError, _>(e.to_string())
}

/// Python callable used as a trial function.
struct PyTrial {
    callable: Py<PyAny>,
}

impl TrialFunction for PyTrial {
    fn trial(&self, input: &TrialInput, _rng: &mut TrialRng) -> Result<f64, TrialError> {
        Python::with_gil(|py| {
            self.callable
                .call1(py, ((**input).clone(),))
                .and_then(|value| value.extract::<f64>(py))
                .map_err(|e| TrialError::Failed(e.to_string()))
        })
    }
}

/// Result of a single run.
#[pyclass(name = "Summary")]
#[derive(Debug, Clone)]
struct PySummary {
    /// Raw outcomes in completion order
    #[pyo3(get)]
    outcomes: Vec<f64>,

    #[pyo3(get)]
    mean: f64,

    /// Population standard deviation
    #[pyo3(get)]
    std_dev: f64,

    #[pyo3(get)]
    min: f64,

    #[pyo3(get)]
    max: f64,

    /// Input the run was executed against
    #[pyo3(get)]
    input: HashMap<String, f64>,
}

impl From<Summary> for PySummary {
    fn from(summary: Summary) -> Self {
        Self {
            outcomes: summary.outcomes,
            mean: summary.statistics.mean,
            std_dev: summary.statistics.std_dev,
            min: summary.statistics.min,
            max: summary.statistics.max,
            input: summary.input.into_inner(),
        }
    }
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(n={}, mean={:.6}, std_dev={:.6})",
            self.outcomes.len(),
            self.mean,
            self.std_dev
        )
    }

    fn __len__(&self) -> usize {
        self.outcomes.len()
    }
}

/// Monte Carlo simulation driven by a Python trial function.
#[pyclass(name = "Simulation")]
struct PySimulation {
    inner: Simulation<PyTrial>,
}

#[pymethods]
impl PySimulation {
    #[new]
    #[pyo3(signature = (runner, iterations = 0, workers = 0, seed = None))]
    fn new(runner: Py<PyAny>, iterations: usize, workers: usize, seed: Option<u64>) -> Self {
        let config = SimulationConfig {
            iterations,
            workers,
            seed,
        };
        Self {
            inner: Simulation::with_config(config, PyTrial { callable: runner }),
        }
    }

    #[getter]
    fn iterations(&self) -> usize {
        self.inner.iterations()
    }

    #[getter]
    fn workers(&self) -> usize {
        self.inner.workers()
    }

    /// Run the simulation against one input mapping.
    #[pyo3(signature = (input = None))]
    fn run(&self, py: Python<'_>, input: Option<HashMap<String, f64>>) -> PyResult<PySummary> {
        let input = TrialInput::from(input.unwrap_or_default());
        py.allow_threads(|| self.inner.run(input))
            .map(PySummary::from)
            .map_err(to_py_err)
    }

    /// Run one simulation per input concurrently; raises on the first failed run.
    fn run_multiple(
        &self,
        py: Python<'_>,
        inputs: Vec<HashMap<String, f64>>,
    ) -> PyResult<Vec<PySummary>> {
        let inputs = inputs.into_iter().map(TrialInput::from).collect();
        let batch = py
            .allow_threads(|| self.inner.run_multiple(inputs))
            .map_err(to_py_err)?;
        batch
            .into_summaries()
            .map(|summaries| summaries.into_iter().map(PySummary::from).collect())
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Simulation(iterations={}, workers={}, seed={:?})",
            self.inner.iterations(),
            self.inner.workers(),
            self.inner.config().seed
        )
    }
}

/// Summarize outcomes: returns (mean, std_dev, min, max).
#[pyfunction]
fn summarize(outcomes: Vec<f64>) -> (f64, f64, f64, f64) {
    let stats = statistics::summarize(&outcomes);
    (stats.mean, stats.std_dev, stats.min, stats.max)
}

/// Python module definition
#[pymodule]
fn montecarlo_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_class::<PySimulation>()?;
    m.add_class::<PySummary>()?;
    Ok(())
}
