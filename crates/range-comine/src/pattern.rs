//! Canonical pattern representation: a sorted, deduplicated set of features.
//! The total order over features is plain lexicographic order on feature
//! labels, so canonicalization never needs to consult an `ObjectSet`.

use std::fmt;

/// A non-empty set of distinct features, canonicalized as a tuple sorted in
/// the feature order. Size-1 patterns are the features themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Pattern(Vec<String>);

impl Pattern {
    /// Builds a pattern from an iterator of features, canonicalizing
    /// (sort + dedup) in the feature order.
    pub fn new(features: impl IntoIterator<Item = String>) -> Self {
        let mut feats: Vec<String> = features.into_iter().collect();
        feats.sort();
        feats.dedup();
        Self(feats)
    }

    /// A size-1 pattern for a single feature.
    pub fn singleton(feature: impl Into<String>) -> Self {
        Self(vec![feature.into()])
    }

    /// Wraps an already-sorted, deduplicated feature list without
    /// re-sorting. Used internally where the caller has already
    /// established the invariant (size-2 candidate generation, the Apriori
    /// join, subpattern removal).
    pub(crate) fn from_sorted(features: Vec<String>) -> Self {
        debug_assert!(features.windows(2).all(|w| w[0] < w[1]));
        Self(features)
    }

    /// The pattern's features, in canonical (feature-order) order.
    pub fn features(&self) -> &[String] {
        &self.0
    }

    /// Pattern size (`k`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` only for a pattern with zero features; never produced by this
    /// crate's own constructors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All size-(k-1) sub-patterns (each omitting one feature), used by
    /// Apriori candidate pruning and CDMP.
    pub fn subpatterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        (0..self.0.len()).map(move |i| {
            let mut feats = self.0.clone();
            feats.remove(i);
            Pattern(feats)
        })
    }

    /// `true` if `self` and `other` are the same size and agree on every
    /// feature but the last — the join-compatibility test used by the
    /// Apriori candidate generator.
    pub(crate) fn shares_prefix(&self, other: &Pattern) -> bool {
        let n = self.0.len();
        n > 0 && n == other.0.len() && self.0[..n - 1] == other.0[..n - 1]
    }

    /// Unions two (k-1)-patterns sharing a prefix into a candidate,
    /// re-sorted and deduplicated.
    pub(crate) fn join(&self, other: &Pattern) -> Pattern {
        let mut feats: Vec<String> = self.0.iter().chain(other.0.iter()).cloned().collect();
        feats.sort();
        feats.dedup();
        Pattern(feats)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_unsorted_input() {
        let p = Pattern::new(["B".to_string(), "A".to_string(), "A".to_string()]);
        assert_eq!(p.features(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn subpatterns_of_triple() {
        let p = Pattern::new(["A".to_string(), "B".to_string(), "C".to_string()]);
        let subs: Vec<_> = p.subpatterns().collect();
        assert_eq!(subs.len(), 3);
        assert!(subs.contains(&Pattern::new(["A".to_string(), "B".to_string()])));
        assert!(subs.contains(&Pattern::new(["A".to_string(), "C".to_string()])));
        assert!(subs.contains(&Pattern::new(["B".to_string(), "C".to_string()])));
    }

    #[test]
    fn join_of_patterns_sharing_a_prefix() {
        let p = Pattern::new(["A".to_string(), "B".to_string()]);
        let q = Pattern::new(["A".to_string(), "C".to_string()]);
        assert!(p.shares_prefix(&q));
        assert_eq!(p.join(&q), Pattern::new(["A".to_string(), "B".to_string(), "C".to_string()]));
    }

    #[test]
    fn patterns_of_different_size_do_not_share_a_prefix() {
        let p = Pattern::new(["A".to_string(), "B".to_string()]);
        let q = Pattern::new(["A".to_string(), "B".to_string(), "C".to_string()]);
        assert!(!p.shares_prefix(&q));
    }
}
