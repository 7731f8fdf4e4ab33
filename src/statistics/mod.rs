//! Summary statistics over a sample of outcomes.

pub mod accumulator;

pub use accumulator::StatsAccumulator;

use crate::types::result::Statistics;

/// Compute mean, population standard deviation, min and max of `outcomes`.
///
/// An empty slice returns `Statistics::default()` (all zeros).
pub fn summarize(outcomes: &[f64]) -> Statistics {
    outcomes.iter().copied().collect::<StatsAccumulator>().finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_all_zero() {
        assert_eq!(summarize(&[]), Statistics::default());
    }

    #[test]
    fn test_known_sample() {
        // Population std dev of 2,4,4,4,5,5,7,9 is exactly 2
        let stats = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let stats = summarize(&[0.1; 1000]);
        assert_eq!(stats.mean, 0.1);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.1);
    }

    #[test]
    fn test_large_offset_constant_is_not_nan() {
        let stats = summarize(&[1.0e9 + 0.3; 333]);
        assert!(!stats.std_dev.is_nan());
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let sample = [3.5, -1.25, 8.0, 0.0, 2.75];
        assert_eq!(summarize(&sample), summarize(&sample));
    }
}
