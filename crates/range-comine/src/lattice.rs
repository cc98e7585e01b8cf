//! The pruned lattice driver: a level-wise Apriori walk over feature-set
//! patterns, skipping any candidate whose critical distance cannot beat its
//! subpatterns' critical distances (CDMP: Critical-Distance-based
//! Monotonic Pruning).

use std::collections::HashMap;

use crate::cliques::{enumerate_size2, enumerate_size_k, Clique};
use crate::collist::ColList;
use crate::error::{validate_parameters, Error, Result};
use crate::neighbors::StarNeighborhood;
use crate::object::ObjectSet;
use crate::participation::critical_distance;
use crate::pattern::Pattern;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the CDMP-pruned range co-location miner: for every pattern with at
/// least one valid clique instance within `[d1, d2]`, records the smallest
/// distance at which its participation index first meets `min_prev`.
///
/// Patterns whose best possible critical distance cannot beat the critical
/// distance already established for one of their (k-1)-subpatterns are
/// pruned before their cliques are even enumerated: anti-monotonicity of
/// participation index means such a pattern can never improve on its
/// subpattern's result.
pub fn range_comine(objects: &ObjectSet, d1: f64, d2: f64, min_prev: f64) -> Result<ColList> {
    validate_parameters(d1, d2, min_prev)?;
    if objects.feature_order().is_empty() {
        return Err(Error::InvalidParameter("dataset has no features".to_string()));
    }

    #[cfg(feature = "ftlog")]
    ftlog::info!("range_comine: starting with d1={d1}, d2={d2}, min_prev={min_prev}");

    let mut result = ColList::new();
    for pattern in objects.size1_patterns() {
        result.insert(d1, pattern);
    }

    if objects.feature_order().len() < 2 {
        return Ok(result);
    }

    let star = StarNeighborhood::build(objects, d2);
    let mut critical: HashMap<Pattern, f64> = HashMap::new();

    // Level 2: every feature pair is a candidate; there is nothing to prune
    // against yet.
    let mut frontier: Vec<Pattern> = candidate_pairs(objects.feature_order());

    let mut level = 2usize;
    while !frontier.is_empty() {
        #[cfg(feature = "ftlog")]
        ftlog::debug!("range_comine: level {level} has {} candidates", frontier.len());

        let evaluated: Vec<(Pattern, Vec<Clique>)> = evaluate_level(&frontier, &star, objects, d2, level, &critical);

        let mut survivors: Vec<Pattern> = Vec::new();
        for (pattern, cliques) in evaluated {
            if let Some(d) = critical_distance(&pattern, &cliques, objects, d1, min_prev) {
                critical.insert(pattern.clone(), d);
                result.insert(d, pattern.clone());
                survivors.push(pattern);
            }
        }

        frontier = candidate_join(&survivors, &critical, level + 1);
        level += 1;
    }

    #[cfg(feature = "ftlog")]
    ftlog::info!("range_comine: finished with {} critical distances", result.len());

    Ok(result)
}

fn evaluate_level(
    frontier: &[Pattern],
    star: &StarNeighborhood,
    objects: &ObjectSet,
    d2: f64,
    level: usize,
    critical: &HashMap<Pattern, f64>,
) -> Vec<(Pattern, Vec<Clique>)> {
    let build = |pattern: &Pattern| -> (Pattern, Vec<Clique>) {
        let mut cliques = if level == 2 { enumerate_size2(pattern, star, objects) } else { enumerate_size_k(pattern, objects, d2) };
        if level >= 3 {
            let min_allowed = pattern.subpatterns().filter_map(|sub| critical.get(&sub).copied()).fold(f64::NEG_INFINITY, f64::max);
            if min_allowed.is_finite() {
                cliques.retain(|c| c.diameter >= min_allowed);
            }
        }
        (pattern.clone(), cliques)
    };

    #[cfg(feature = "parallel")]
    {
        frontier.par_iter().map(build).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        frontier.iter().map(build).collect()
    }
}

fn candidate_pairs(features: &[String]) -> Vec<Pattern> {
    let mut out = Vec::new();
    for i in 0..features.len() {
        for j in (i + 1)..features.len() {
            out.push(Pattern::from_sorted(vec![features[i].clone(), features[j].clone()]));
        }
    }
    out
}

/// Joins size-(k-1) survivors into size-k candidates (Apriori join), then
/// drops any candidate whose required subpatterns are missing from
/// `critical` (prevalence is anti-monotone, so an absent subpattern means
/// the candidate cannot possibly be prevalent either).
fn candidate_join(survivors: &[Pattern], critical: &HashMap<Pattern, f64>, target_size: usize) -> Vec<Pattern> {
    let mut candidates: std::collections::BTreeSet<Pattern> = std::collections::BTreeSet::new();
    for i in 0..survivors.len() {
        for j in (i + 1)..survivors.len() {
            if survivors[i].shares_prefix(&survivors[j]) {
                let joined = survivors[i].join(&survivors[j]);
                if joined.len() == target_size {
                    candidates.insert(joined);
                }
            }
        }
    }

    candidates
        .into_iter()
        .filter(|candidate| candidate.subpatterns().all(|sub| critical.contains_key(&sub)))
        .collect()
}
