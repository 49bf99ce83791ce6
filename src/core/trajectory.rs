//! Append-only histories of keyed values.
//!
//! A machine keeps two trajectories: the states it entered and the outputs it
//! emitted. Each entry pairs the value with the order key of the input that
//! produced it.

use serde::{Deserialize, Serialize};

/// A value tagged with the order key of the input that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamped<K> {
    pub key: K,
    pub value: String,
}

/// Ordered, append-only sequence of stamped values.
///
/// Keys are stored exactly as supplied. No ordering or uniqueness check is
/// made, so non-monotonic or repeated keys are kept as-is.
///
/// # Example
///
/// ```rust
/// use mealy::core::Trajectory;
///
/// let mut states = Trajectory::new();
/// states.record(2, "S1");
/// states.record(4, "S0");
///
/// assert_eq!(states.len(), 2);
/// assert_eq!(states.pairs(), vec![(2, "S1"), (4, "S0")]);
/// assert_eq!(states.values().collect::<Vec<_>>(), vec!["S1", "S0"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory<K> {
    entries: Vec<Stamped<K>>,
}

impl<K> Default for Trajectory<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Trajectory<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry.
    pub fn record(&mut self, key: K, value: impl Into<String>) {
        self.entries.push(Stamped {
            key,
            value: value.into(),
        });
    }

    pub fn entries(&self) -> &[Stamped<K>] {
        &self.entries
    }

    /// Values without their keys, in order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn last(&self) -> Option<&Stamped<K>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, value)` pairs, convenient for comparisons.
    pub fn pairs(&self) -> Vec<(K, &str)>
    where
        K: Clone,
    {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trajectory_is_empty() {
        let trajectory: Trajectory<i64> = Trajectory::new();
        assert!(trajectory.is_empty());
        assert!(trajectory.last().is_none());
        assert_eq!(trajectory.values().count(), 0);
    }

    #[test]
    fn record_preserves_order() {
        let mut trajectory = Trajectory::new();
        trajectory.record(9, "c");
        trajectory.record(-1, "a");
        trajectory.record(9, "b");

        assert_eq!(trajectory.pairs(), vec![(9, "c"), (-1, "a"), (9, "b")]);
        assert_eq!(trajectory.keys().copied().collect::<Vec<_>>(), vec![9, -1, 9]);
    }

    #[test]
    fn last_returns_most_recent_entry() {
        let mut trajectory = Trajectory::new();
        trajectory.record((), "S0");
        trajectory.record((), "S1");

        let last = trajectory.last().unwrap();
        assert_eq!(last.value, "S1");
    }

    #[test]
    fn trajectory_serializes_as_entry_list() {
        let mut trajectory = Trajectory::new();
        trajectory.record(2, "Output_A");

        let json = serde_json::to_string(&trajectory).unwrap();
        assert_eq!(json, r#"[{"key":2,"value":"Output_A"}]"#);

        let deserialized: Trajectory<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(trajectory, deserialized);
    }
}
