//! Two unpruned oracles used to cross-check [`crate::lattice::range_comine`]
//! against independently-derived results: a fully naive scan over every
//! pairwise distance, and an incremental walk that reuses clique instances
//! across consecutive distance steps.

use std::collections::{BTreeSet, HashSet};

use crate::cliques::{enumerate_size2, enumerate_size_k, Clique};
use crate::collist::ColList;
use crate::error::{validate_parameters, Error, Result};
use crate::neighbors::StarNeighborhood;
use crate::object::ObjectSet;
use crate::ordered::OrderedDistance;
use crate::participation::participation_index;
use crate::pattern::Pattern;

/// Recomputes every candidate pattern's clique set from scratch at every
/// distinct pairwise distance in `[d1, d2]`, descending, and records the
/// last distance step at which prevalence was still satisfied before the
/// pattern dropped below threshold going downward (equivalently, the
/// distance just above the first ascending step that qualifies).
///
/// No incremental reuse whatsoever: the most literal possible reading of
/// "recompute everything at every distance", used only to cross-validate
/// the other algorithms.
pub fn naive_range(objects: &ObjectSet, d1: f64, d2: f64, min_prev: f64) -> Result<ColList> {
    validate_parameters(d1, d2, min_prev)?;
    if objects.feature_order().is_empty() {
        return Err(Error::InvalidParameter("dataset has no features".to_string()));
    }

    let mut result = seed_size1(objects, d1);
    if objects.feature_order().len() < 2 {
        return Ok(result);
    }

    let steps = pair_distances(objects, d1, d2);
    let candidates = all_candidate_patterns(objects.feature_order());
    for (d, pattern) in prevalent_from(objects, &candidates, &steps, d1, min_prev) {
        result.insert(d, pattern);
    }
    Ok(result)
}

/// Behaviorally equivalent to [`naive_range`], but builds the star
/// neighborhood once at `d2` and reuses it for every size-2 pattern's
/// clique scan at every distance step, instead of rebuilding neighbor
/// lists from scratch each time.
pub fn range_inc_mining(objects: &ObjectSet, d1: f64, d2: f64, min_prev: f64) -> Result<ColList> {
    validate_parameters(d1, d2, min_prev)?;
    if objects.feature_order().is_empty() {
        return Err(Error::InvalidParameter("dataset has no features".to_string()));
    }

    let mut result = seed_size1(objects, d1);
    if objects.feature_order().len() < 2 {
        return Ok(result);
    }

    let steps = pair_distances(objects, d1, d2);
    let candidates = all_candidate_patterns(objects.feature_order());
    let star = StarNeighborhood::build(objects, d2);

    for pattern in candidates {
        if let Some(d) = prevalent_at(&pattern, objects, Some(&star), &steps, d1, min_prev) {
            result.insert(d, pattern);
        }
    }
    Ok(result)
}

fn prevalent_from(objects: &ObjectSet, candidates: &[Pattern], steps: &[f64], d1: f64, min_prev: f64) -> Vec<(f64, Pattern)> {
    candidates
        .iter()
        .filter_map(|pattern| prevalent_at(pattern, objects, None, steps, d1, min_prev).map(|d| (d, pattern.clone())))
        .collect()
}

/// Seeds a result with every size-1 pattern at `d1`, unconditionally: these
/// never go through prevalence evaluation.
fn seed_size1(objects: &ObjectSet, d1: f64) -> ColList {
    let mut result = ColList::new();
    for pattern in objects.size1_patterns() {
        result.insert(d1, pattern);
    }
    result
}

/// Walks `steps` (descending distances) from the largest down to `d1`,
/// finding the smallest distance at which `pattern`'s cliques meet
/// `min_prev`. Rebuilds cliques fresh at every step; `star`, when given,
/// is reused as a precomputed edge index for size-2 patterns instead of
/// being rebuilt.
fn prevalent_at(
    pattern: &Pattern,
    objects: &ObjectSet,
    star: Option<&StarNeighborhood>,
    steps: &[f64],
    d1: f64,
    min_prev: f64,
) -> Option<f64> {
    let mut last_qualifying: Option<f64> = None;
    for &d in steps {
        if d < d1 {
            break;
        }
        let cliques: Vec<Clique> = cliques_at_distance(pattern, objects, star, d);
        let pi = participation_index(pattern, &cliques, objects);
        if pi >= min_prev {
            last_qualifying = Some(d);
        } else if last_qualifying.is_some() {
            break;
        }
    }
    last_qualifying
}

fn cliques_at_distance(pattern: &Pattern, objects: &ObjectSet, star: Option<&StarNeighborhood>, d: f64) -> Vec<Clique> {
    if pattern.len() == 2 {
        match star {
            Some(star) => enumerate_size2(pattern, star, objects).into_iter().filter(|c| c.diameter <= d).collect(),
            None => {
                let local = StarNeighborhood::build(objects, d);
                enumerate_size2(pattern, &local, objects)
            }
        }
    } else {
        enumerate_size_k(pattern, objects, d)
    }
}

/// Every distinct finite pairwise distance in `[d1, d2]`, descending. The
/// step sequence both baselines walk to find the first qualifying
/// distance.
fn pair_distances(objects: &ObjectSet, d1: f64, d2: f64) -> Vec<f64> {
    let objs = objects.objects();
    let mut set: BTreeSet<OrderedDistance> = BTreeSet::new();
    for i in 0..objs.len() {
        for j in (i + 1)..objs.len() {
            let d = crate::geometry::dist(&objs[i], &objs[j]);
            if d.is_finite() && d >= d1 && d <= d2 {
                set.insert(OrderedDistance(d));
            }
        }
    }
    let mut out: Vec<f64> = set.into_iter().map(|d| d.0).collect();
    out.reverse();
    out
}

/// Every feature-set pattern of size >= 2 reachable by closing the feature
/// powerset under the Apriori join, used as the fixed candidate universe
/// both baselines evaluate. Anti-monotonicity guarantees every eventually
/// prevalent pattern appears here, at the cost of also generating some
/// candidates that never have a single valid clique.
fn all_candidate_patterns(features: &[String]) -> Vec<Pattern> {
    let mut level: Vec<Pattern> = Vec::new();
    for i in 0..features.len() {
        for j in (i + 1)..features.len() {
            level.push(Pattern::from_sorted(vec![features[i].clone(), features[j].clone()]));
        }
    }

    let mut all: Vec<Pattern> = level.clone();
    while level.len() > 1 {
        level = apriori_join(&level);
        all.extend(level.iter().cloned());
    }
    all
}

fn apriori_join(level: &[Pattern]) -> Vec<Pattern> {
    let mut seen: HashSet<Pattern> = HashSet::new();
    let target_size = level.first().map(Pattern::len).unwrap_or(0) + 1;
    for i in 0..level.len() {
        for j in (i + 1)..level.len() {
            if level[i].shares_prefix(&level[j]) {
                let joined = level[i].join(&level[j]);
                if joined.len() == target_size {
                    seen.insert(joined);
                }
            }
        }
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    fn two_pair_dataset() -> ObjectSet {
        ObjectSet::new(vec![
            Object::new("a1", "A", 0.0, 0.0),
            Object::new("b1", "B", 0.5, 0.0),
            Object::new("c1", "C", 0.5, 0.5),
        ])
    }

    #[test]
    fn naive_and_incremental_agree_on_pair_dataset() {
        let objects = two_pair_dataset();
        let naive = naive_range(&objects, 0.0, 2.0, 1.0).unwrap();
        let inc = range_inc_mining(&objects, 0.0, 2.0, 1.0).unwrap();
        assert_eq!(naive.len(), inc.len());
    }

    #[test]
    fn single_feature_dataset_yields_only_its_size1_pattern() {
        let objects = ObjectSet::new(vec![Object::new("a1", "A", 0.0, 0.0)]);
        assert_eq!(naive_range(&objects, 0.0, 10.0, 0.5).unwrap().len(), 1);
        assert_eq!(range_inc_mining(&objects, 0.0, 10.0, 0.5).unwrap().len(), 1);
    }

    #[test]
    fn empty_dataset_is_an_invalid_parameter() {
        let objects = ObjectSet::new(vec![]);
        assert!(naive_range(&objects, 0.0, 10.0, 0.5).is_err());
        assert!(range_inc_mining(&objects, 0.0, 10.0, 0.5).is_err());
    }

    #[test]
    fn all_candidate_patterns_closes_under_join() {
        let features = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let patterns = all_candidate_patterns(&features);
        assert!(patterns.contains(&Pattern::new(["A".to_string(), "B".to_string()])));
        assert!(patterns.contains(&Pattern::new(["A".to_string(), "B".to_string(), "C".to_string()])));
    }
}
