//! Single-pass statistics accumulator.

use crate::types::result::Statistics;

/// Streaming accumulator for [`Statistics`].
///
/// Uses Welford's update for mean and variance, so a constant sample has a
/// mean equal to the constant and a variance of exactly zero, with no
/// cancellation between large sums.
///
/// `min` / `max` start at `f64::MAX` / `f64::MIN` and are only reported once
/// at least one value has been pushed. Until then `finish` returns all
/// zeros.
#[derive(Debug, Clone, Copy)]
pub struct StatsAccumulator {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::MAX,
            max: f64::MIN,
        }
    }

    /// Add one outcome.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Number of outcomes pushed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Snapshot the statistics of everything pushed so far.
    pub fn finish(&self) -> Statistics {
        if self.count == 0 {
            return Statistics::default();
        }

        // Round-off can leave m2 a hair below zero
        let variance = (self.m2 / self.count as f64).max(0.0);

        let mean = if self.min <= self.max {
            self.mean.clamp(self.min, self.max)
        } else {
            self.mean
        };

        Statistics {
            mean,
            std_dev: variance.sqrt(),
            min: self.min,
            max: self.max,
        }
    }
}

impl Extend<f64> for StatsAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for StatsAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
