//! Clique instance enumeration: two code paths, one for size-2 patterns
//! (built from the star neighborhood) and one for size-k (k >= 3) patterns
//! (built from a Cartesian product over per-feature buckets). No
//! `itertools` dependency; both paths are hand-rolled with explicit index
//! loops.

use std::collections::HashMap;

use crate::geometry::dist;
use crate::neighbors::StarNeighborhood;
use crate::object::{Object, ObjectSet};
use crate::pattern::Pattern;

/// A clique instance: the canonical (ascending-id-sorted) tuple of object
/// ids realizing a pattern, annotated with its diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Clique {
    /// Object ids, sorted ascending.
    pub ids: Vec<String>,
    /// The maximum pairwise distance among `ids`.
    pub diameter: f64,
}

/// Enumerates size-2 clique instances for a feature pair by scanning the
/// star neighborhood rather than recomputing distances from scratch.
pub fn enumerate_size2(pattern: &Pattern, star: &StarNeighborhood, objects: &ObjectSet) -> Vec<Clique> {
    debug_assert_eq!(pattern.len(), 2);
    let f1 = pattern.features()[0].as_str();
    let f2 = pattern.features()[1].as_str();

    let mut best: HashMap<(String, String), f64> = HashMap::new();
    for center in objects.objects() {
        let cfeat = center.feature.as_str();
        if cfeat != f1 && cfeat != f2 {
            continue;
        }
        for n in star.neighbors_of(&center.id) {
            let nfeat = n.feature.as_str();
            if nfeat == cfeat {
                continue;
            }
            if nfeat != f1 && nfeat != f2 {
                continue;
            }
            let pair = sorted_pair(center.id.clone(), n.id.clone());
            best.entry(pair).and_modify(|d| if n.distance < *d { *d = n.distance }).or_insert(n.distance);
        }
    }

    best.into_iter().map(|((a, b), diameter)| Clique { ids: vec![a, b], diameter }).collect()
}

fn sorted_pair(a: String, b: String) -> (String, String) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Enumerates size-k (k >= 3) clique instances via the Cartesian product of
/// per-feature object buckets, verifying all `C(k,2)` pairwise distances are
/// `<= dmax`. Exponential in the per-feature counts; suitable for
/// demo-scale datasets only.
pub fn enumerate_size_k(pattern: &Pattern, objects: &ObjectSet, dmax: f64) -> Vec<Clique> {
    let buckets: Vec<Vec<&Object>> = pattern
        .features()
        .iter()
        .map(|f| objects.objects().iter().filter(|o| &o.feature == f).collect())
        .collect();

    if buckets.iter().any(Vec::is_empty) {
        return Vec::new();
    }

    let mut best: HashMap<Vec<String>, f64> = HashMap::new();
    let mut combo: Vec<usize> = vec![0; buckets.len()];
    loop {
        let chosen: Vec<&Object> = combo.iter().zip(&buckets).map(|(&i, bucket)| bucket[i]).collect();

        if let Some(dia) = pairwise_within(&chosen, dmax) {
            let mut ids: Vec<String> = chosen.iter().map(|o| o.id.clone()).collect();
            ids.sort();
            best.entry(ids).and_modify(|d| if dia < *d { *d = dia }).or_insert(dia);
        }

        if !advance(&mut combo, &buckets) {
            break;
        }
    }

    best.into_iter().map(|(ids, diameter)| Clique { ids, diameter }).collect()
}

/// Checks all `C(k,2)` pairwise distances are `<= dmax`, returning the
/// diameter (the maximum pairwise distance) if so, or `None` on the first
/// violation.
fn pairwise_within(objs: &[&Object], dmax: f64) -> Option<f64> {
    let mut diameter = 0.0_f64;
    for i in 0..objs.len() {
        for j in (i + 1)..objs.len() {
            let d = dist(objs[i], objs[j]);
            if !d.is_finite() || d > dmax {
                return None;
            }
            if d > diameter {
                diameter = d;
            }
        }
    }
    Some(diameter)
}

/// Advances a mixed-radix counter over the bucket sizes; `false` once every
/// combination has been produced.
fn advance(combo: &mut [usize], buckets: &[Vec<&Object>]) -> bool {
    for i in (0..combo.len()).rev() {
        combo[i] += 1;
        if combo[i] < buckets[i].len() {
            return true;
        }
        combo[i] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    fn objects() -> ObjectSet {
        ObjectSet::new(vec![
            Object::new("a1", "A", 0.0, 0.0),
            Object::new("a2", "A", 10.0, 0.0),
            Object::new("b1", "B", 0.5, 0.0),
            Object::new("c1", "C", 0.5, 0.5),
        ])
    }

    #[test]
    fn size2_finds_the_near_pair_only() {
        let objects = objects();
        let star = StarNeighborhood::build(&objects, 1.0);
        let pattern = Pattern::new(["A".to_string(), "B".to_string()]);
        let cliques = enumerate_size2(&pattern, &star, &objects);
        assert_eq!(cliques.len(), 1);
        assert_eq!(cliques[0].ids, vec!["a1".to_string(), "b1".to_string()]);
        assert!((cliques[0].diameter - 0.5).abs() < 1e-9);
    }

    #[test]
    fn size_k_enumerates_valid_triples_only() {
        let objects = objects();
        let pattern = Pattern::new(["A".to_string(), "B".to_string(), "C".to_string()]);
        let cliques = enumerate_size_k(&pattern, &objects, 1.0);
        // a2 is too far from b1/c1 to form a valid triple at dmax=1.0.
        assert_eq!(cliques.len(), 1);
        assert_eq!(cliques[0].ids, vec!["a1".to_string(), "b1".to_string(), "c1".to_string()]);
    }

    #[test]
    fn size_k_returns_empty_for_a_missing_feature() {
        let objects = objects();
        let pattern = Pattern::new(["A".to_string(), "D".to_string()]);
        assert!(enumerate_size_k(&pattern, &objects, 100.0).is_empty());
    }
}
