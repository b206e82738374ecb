//! Weighted routing groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The weighted set of members a continuum is built from.
///
/// Member names are unique and weights are positive reals. The map is
/// ordered by name, so two groups holding the same members build their
/// rings in the same order regardless of insertion history.
///
/// A group with no members, or one whose total weight is not positive,
/// is rejected at continuum construction — not here — so that partially
/// assembled groups can exist while a configuration is being read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    members: BTreeMap<String, f64>,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member with the given weight, replacing any previous weight.
    ///
    /// Returns the previous weight if the member was already present.
    pub fn insert(&mut self, name: impl Into<String>, weight: f64) -> Option<f64> {
        self.members.insert(name.into(), weight)
    }

    /// Remove a member, returning its weight if it was present.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.members.remove(name)
    }

    /// Return the weight of a member, if present.
    pub fn weight(&self, name: &str) -> Option<f64> {
        self.members.get(name).copied()
    }

    /// Number of members in the group.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of all member weights.
    pub fn total_weight(&self) -> f64 {
        self.members.values().sum()
    }

    /// Iterate over `(name, weight)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.members.iter().map(|(name, weight)| (name.as_str(), *weight))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Group {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            members: iter
                .into_iter()
                .map(|(name, weight)| (name.into(), weight))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_weight() {
        let mut group = Group::new();
        assert!(group.is_empty());

        assert_eq!(group.insert("node-a", 1.0), None);
        assert_eq!(group.insert("node-b", 2.5), None);
        assert_eq!(group.len(), 2);
        assert_eq!(group.weight("node-a"), Some(1.0));
        assert_eq!(group.weight("node-c"), None);
    }

    #[test]
    fn test_insert_replaces_weight() {
        let mut group = Group::new();
        group.insert("node-a", 1.0);
        assert_eq!(group.insert("node-a", 3.0), Some(1.0));
        assert_eq!(group.len(), 1);
        assert_eq!(group.weight("node-a"), Some(3.0));
    }

    #[test]
    fn test_remove() {
        let mut group = Group::from_iter([("node-a", 1.0), ("node-b", 2.0)]);
        assert_eq!(group.remove("node-a"), Some(1.0));
        assert_eq!(group.remove("node-a"), None);
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_total_weight() {
        let group = Group::from_iter([("a", 1.0), ("b", 2.0), ("c", 0.5)]);
        assert!((group.total_weight() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let group = Group::from_iter([("charlie", 1.0), ("alpha", 1.0), ("bravo", 1.0)]);
        let names: Vec<&str> = group.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_serde_transparent_roundtrip() {
        let group = Group::from_iter([("node-a", 2.0), ("node-b", 1.0)]);
        let toml = toml::to_string(&group).unwrap();
        let decoded: Group = toml::from_str(&toml).unwrap();
        assert_eq!(group, decoded);
    }
}
