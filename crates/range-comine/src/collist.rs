//! The mining result: critical distance to the patterns that first become
//! prevalent at that distance.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::ordered::OrderedDistance;
use crate::pattern::Pattern;

/// Maps each critical distance to the patterns whose prevalence first meets
/// the threshold at that distance. Iterates in ascending distance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColList(BTreeMap<OrderedDistance, Vec<Pattern>>);

impl ColList {
    /// An empty result.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records `pattern` as critical at `distance`, keeping the bucket at
    /// that distance sorted in feature order (patterns may arrive out of
    /// order: a size-2 and a size-3 pattern sharing a critical distance are
    /// inserted from different lattice levels).
    pub fn insert(&mut self, distance: f64, pattern: Pattern) {
        let bucket = self.0.entry(OrderedDistance(distance)).or_default();
        let pos = bucket.partition_point(|p| p < &pattern);
        bucket.insert(pos, pattern);
    }

    /// `true` if no pattern ever became prevalent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of distinct critical distances recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates `(distance, patterns)` pairs in ascending distance order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[Pattern])> {
        self.0.iter().map(|(d, ps)| (d.0, ps.as_slice()))
    }

    /// The patterns recorded at exactly `distance`, if any.
    pub fn patterns_at(&self, distance: f64) -> Option<&[Pattern]> {
        self.0.get(&OrderedDistance(distance)).map(Vec::as_slice)
    }
}

impl Serialize for ColList {
    /// Renders distances as object keys. JSON object keys must be strings,
    /// so each `f64` distance is formatted via `to_string` rather than
    /// emitted as a numeric key.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (OrderedDistance(d), patterns) in &self.0 {
            map.serialize_entry(&d.to_string(), patterns)?;
        }
        map.end()
    }
}
