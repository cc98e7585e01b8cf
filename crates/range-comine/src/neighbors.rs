//! Star-neighborhood construction.

use std::collections::HashMap;

use crate::geometry::dist;
use crate::object::ObjectSet;

/// One neighbor entry in a center's star: the neighbor's id, its feature,
/// and its distance from the center (`0.0` for the center's own self-entry).
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// The neighbor's object id.
    pub id: String,
    /// The neighbor's feature.
    pub feature: String,
    /// Distance from the center to this neighbor.
    pub distance: f64,
}

/// Per-center neighbor lists built at a fixed `dmax`, deduplicated via the
/// feature order.
#[derive(Debug)]
pub struct StarNeighborhood {
    star: HashMap<String, Vec<Neighbor>>,
}

impl StarNeighborhood {
    /// Builds the star neighborhood via an O(n^2) double scan: every center
    /// gets a self-entry at distance `0.0`, and a non-self pair `(a, b)` is
    /// recorded from `a`'s side when `dist(a, b) <= dmax` and `b`'s feature
    /// precedes-or-equals `a`'s in the feature order.
    ///
    /// For same-feature neighbor pairs the order predicate holds from both
    /// sides, so both directions get recorded. This is deliberate, not a
    /// bug: [`crate::cliques`] dedupes by canonical sorted-id tuple and
    /// tolerates either direction.
    pub fn build(objects: &ObjectSet, dmax: f64) -> Self {
        let mut star: HashMap<String, Vec<Neighbor>> = HashMap::with_capacity(objects.len());

        for center in objects.objects() {
            let entries = star.entry(center.id.clone()).or_default();
            for other in objects.objects() {
                if center.id == other.id {
                    entries.push(Neighbor { id: other.id.clone(), feature: other.feature.clone(), distance: 0.0 });
                    continue;
                }
                let d = dist(center, other);
                if d.is_finite() && d <= dmax && objects.order_le(&other.feature, &center.feature) {
                    entries.push(Neighbor { id: other.id.clone(), feature: other.feature.clone(), distance: d });
                }
            }
        }

        Self { star }
    }

    /// The neighbor list for `center`, or an empty slice if `center` is not
    /// a known id.
    pub fn neighbors_of(&self, center: &str) -> &[Neighbor] {
        self.star.get(center).map(Vec::as_slice).unwrap_or(&[])
    }
}
