//! Participation-index evaluation and critical-distance computation.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::cliques::Clique;
use crate::object::ObjectSet;
use crate::ordered::OrderedDistance;
use crate::pattern::Pattern;

/// Computes PI over a clique set for `pattern`: the minimum, over features
/// in the pattern, of (distinct participating ids) / (total ids with that
/// feature in the full dataset). Returns `0.0` for an empty clique set or
/// for any feature with zero total instances: an absent feature is fatal
/// to prevalence, not vacuous truth.
pub fn participation_index(pattern: &Pattern, cliques: &[Clique], objects: &ObjectSet) -> f64 {
    if cliques.is_empty() {
        return 0.0;
    }

    let mut seen: HashMap<&str, HashSet<&str>> =
        pattern.features().iter().map(|f| (f.as_str(), HashSet::new())).collect();

    for clique in cliques {
        for id in &clique.ids {
            if let Some(obj) = objects.get(id) {
                if let Some(set) = seen.get_mut(obj.feature.as_str()) {
                    set.insert(id.as_str());
                }
            }
        }
    }

    pattern
        .features()
        .iter()
        .map(|f| {
            let total = objects.total_for_feature(f);
            if total == 0 { 0.0 } else { seen[f.as_str()].len() as f64 / total as f64 }
        })
        .fold(f64::INFINITY, f64::min)
}

/// Finds the smallest diameter `d` in `[d1, ..]`, among the cliques'
/// diameters, at which cumulative PI first meets `min_prev`. Returns `None`
/// if no diameter qualifies.
///
/// Groups per-feature participating ids by diameter level, walks diameters
/// ascending while maintaining a running union per feature, and returns the
/// first `d >= d1` whose resulting PI meets `min_prev`.
pub fn critical_distance(
    pattern: &Pattern,
    cliques: &[Clique],
    objects: &ObjectSet,
    d1: f64,
    min_prev: f64,
) -> Option<f64> {
    if cliques.is_empty() {
        return None;
    }

    let mut by_diameter: BTreeMap<OrderedDistance, HashMap<&str, HashSet<&str>>> = BTreeMap::new();
    for clique in cliques {
        let bucket = by_diameter
            .entry(OrderedDistance(clique.diameter))
            .or_insert_with(|| pattern.features().iter().map(|f| (f.as_str(), HashSet::new())).collect());
        for id in &clique.ids {
            if let Some(obj) = objects.get(id) {
                if let Some(set) = bucket.get_mut(obj.feature.as_str()) {
                    set.insert(id.as_str());
                }
            }
        }
    }

    let totals: HashMap<&str, usize> =
        pattern.features().iter().map(|f| (f.as_str(), objects.total_for_feature(f))).collect();

    let mut running: HashMap<&str, HashSet<&str>> =
        pattern.features().iter().map(|f| (f.as_str(), HashSet::new())).collect();

    for (OrderedDistance(d), feat_ids) in by_diameter {
        for (f, ids) in feat_ids {
            running.get_mut(f).expect("running tracks exactly the pattern's features").extend(ids);
        }
        if d < d1 {
            continue;
        }
        let pi = pattern
            .features()
            .iter()
            .map(|f| {
                let total = totals[f.as_str()];
                if total == 0 { 0.0 } else { running[f.as_str()].len() as f64 / total as f64 }
            })
            .fold(f64::INFINITY, f64::min);
        if pi >= min_prev {
            return Some(d);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    fn two_features_two_each() -> ObjectSet {
        ObjectSet::new(vec![
            Object::new("a1", "A", 0.0, 0.0),
            Object::new("a2", "A", 1.0, 0.0),
            Object::new("b1", "B", 2.0, 0.0),
            Object::new("b2", "B", 3.0, 0.0),
        ])
    }

    #[test]
    fn pi_is_zero_with_no_cliques() {
        let objects = two_features_two_each();
        let pattern = Pattern::new(["A".to_string(), "B".to_string()]);
        assert_eq!(participation_index(&pattern, &[], &objects), 0.0);
    }

    #[test]
    fn pi_is_the_minimum_feature_ratio() {
        let objects = two_features_two_each();
        let pattern = Pattern::new(["A".to_string(), "B".to_string()]);
        let cliques = vec![Clique { ids: vec!["a1".to_string(), "b1".to_string()], diameter: 2.0 }];
        // A: 1/2 participating, B: 1/2 participating -> PI = 0.5
        assert!((participation_index(&pattern, &cliques, &objects) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn critical_distance_is_the_first_diameter_meeting_threshold() {
        let objects = two_features_two_each();
        let pattern = Pattern::new(["A".to_string(), "B".to_string()]);
        let cliques = vec![
            Clique { ids: vec!["a1".to_string(), "b1".to_string()], diameter: 2.0 },
            Clique { ids: vec!["a2".to_string(), "b2".to_string()], diameter: 4.0 },
        ];
        // At d=2.0: PI = 0.5 (one of each feature seen). At d=4.0: PI = 1.0.
        assert_eq!(critical_distance(&pattern, &cliques, &objects, 0.0, 1.0), Some(4.0));
        assert_eq!(critical_distance(&pattern, &cliques, &objects, 0.0, 0.5), Some(2.0));
    }

    #[test]
    fn critical_distance_respects_d1_floor() {
        let objects = two_features_two_each();
        let pattern = Pattern::new(["A".to_string(), "B".to_string()]);
        let cliques = vec![Clique { ids: vec!["a1".to_string(), "b1".to_string()], diameter: 2.0 }];
        assert_eq!(critical_distance(&pattern, &cliques, &objects, 3.0, 0.1), None);
    }

    #[test]
    fn critical_distance_none_when_threshold_unreachable() {
        let objects = two_features_two_each();
        let pattern = Pattern::new(["A".to_string(), "B".to_string()]);
        let cliques = vec![Clique { ids: vec!["a1".to_string(), "b1".to_string()], diameter: 2.0 }];
        assert_eq!(critical_distance(&pattern, &cliques, &objects, 0.0, 1.0), None);
    }
}
