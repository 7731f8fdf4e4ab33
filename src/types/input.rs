//! Named numeric inputs for a run.

use std::collections::HashMap;

use derive_more::{Deref, From};

/// Named inputs handed to every trial of a run.
///
/// Workers only ever see a shared reference, so a run's input cannot
/// change underneath its trials.
#[derive(Debug, Clone, Default, PartialEq, Deref, From)]
pub struct TrialInput(HashMap<String, f64>);

impl TrialInput {
    /// Create an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named value, replacing any previous value under the same name.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Value for `name`, or `0.0` when the name is absent.
    #[inline]
    pub fn value(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(0.0)
    }

    /// Consume the input and return the underlying map.
    pub fn into_inner(self) -> HashMap<String, f64> {
        self.0
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for TrialInput {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_reads_as_zero() {
        let input = TrialInput::new().with("days", 365.0);
        assert_eq!(input.value("days"), 365.0);
        assert_eq!(input.value("initialValue"), 0.0);
    }

    #[test]
    fn test_with_replaces_existing_key() {
        let input = TrialInput::new().with("x", 1.0).with("x", 2.0);
        assert_eq!(input.len(), 1);
        assert_eq!(input.value("x"), 2.0);
    }

    #[test]
    fn test_from_iterator_and_map() {
        let a: TrialInput = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        let mut map = HashMap::new();
        map.insert("a".to_string(), 1.0);
        map.insert("b".to_string(), 2.0);
        assert_eq!(a, TrialInput::from(map));
    }
}
