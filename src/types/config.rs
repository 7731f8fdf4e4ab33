//! Simulation configuration.

/// Trials per run when the caller leaves `iterations` at zero.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Worker pool size when the caller leaves `workers` at zero.
pub const DEFAULT_WORKERS: usize = 50;

/// Configuration for a simulation.
///
/// Zero `iterations` or `workers` mean "use the default" and are replaced
/// by [`DEFAULT_ITERATIONS`] / [`DEFAULT_WORKERS`] on normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationConfig {
    /// Number of trials per run
    pub iterations: usize,

    /// Number of concurrent workers per run
    pub workers: usize,

    /// Base seed for the per-worker random streams (None = OS entropy)
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a config with the given iteration and worker counts.
    pub fn new(iterations: usize, workers: usize) -> Self {
        Self {
            iterations,
            workers,
            seed: None,
        }
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace zero counts with their defaults.
    pub fn normalized(self) -> Self {
        Self {
            iterations: if self.iterations == 0 {
                DEFAULT_ITERATIONS
            } else {
                self.iterations
            },
            workers: if self.workers == 0 {
                DEFAULT_WORKERS
            } else {
                self.workers
            },
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counts_normalize_to_defaults() {
        let config = SimulationConfig::default().normalized();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_explicit_counts_are_kept() {
        let config = SimulationConfig::new(7, 3).with_seed(42).normalized();
        assert_eq!(config, SimulationConfig { iterations: 7, workers: 3, seed: Some(42) });
    }
}
