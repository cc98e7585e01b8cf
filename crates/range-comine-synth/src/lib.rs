//! Synthetic spatial object generation, seeded explicitly so generated
//! datasets are reproducible across runs.

use rand::prelude::*;

use range_comine::Object;

/// Generates `instances_per_feat` objects for each of `n_features`
/// features (named `A`, `B`, `C`, ... in order), uniformly scattered over
/// `[0, width) x [0, height)`, using the RNG seeded from `seed`.
///
/// Object ids are `"{feature}.{index}"` with a dataset-wide monotonically
/// increasing index, so every id is unique even across features.
pub fn generate(n_features: usize, instances_per_feat: usize, width: f64, height: f64, seed: u64) -> Vec<Object> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut objects = Vec::with_capacity(n_features * instances_per_feat);
    let mut idx = 1usize;

    for feature in feature_labels(n_features) {
        for _ in 0..instances_per_feat {
            let x = rng.gen_range(0.0..width);
            let y = rng.gen_range(0.0..height);
            objects.push(Object::new(format!("{feature}.{idx}"), feature.clone(), x, y));
            idx += 1;
        }
    }

    objects
}

/// Feature labels `A`, `B`, ..., `Z`, `AA`, `AB`, ... for `n` features, in
/// the order they should be generated.
fn feature_labels(n: usize) -> Vec<String> {
    (0..n).map(spreadsheet_label).collect()
}

/// Converts a zero-based index into a spreadsheet-style column label
/// (`0 -> "A"`, `25 -> "Z"`, `26 -> "AA"`), so any feature count is
/// supported without running out of single letters.
fn spreadsheet_label(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        let rem = index % 26;
        letters.push((b'A' + rem as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn generates_the_requested_counts() {
        let objects = generate(3, 4, 100.0, 100.0, 7);
        assert_eq!(objects.len(), 12);
        for feature in ["A", "B", "C"] {
            assert_eq!(objects.iter().filter(|o| o.feature == feature).count(), 4);
        }
    }

    #[test]
    fn is_reproducible_for_a_fixed_seed() {
        let a = generate(3, 4, 100.0, 100.0, 7);
        let b = generate(3, 4, 100.0, 100.0, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = generate(3, 4, 100.0, 100.0, 7);
        let b = generate(3, 4, 100.0, 100.0, 8);
        assert_ne!(a, b);
    }

    #[test]
    fn stays_within_bounds() {
        let objects = generate(2, 20, 50.0, 30.0, 1);
        for o in &objects {
            assert!((0.0..50.0).contains(&o.x));
            assert!((0.0..30.0).contains(&o.y));
        }
    }

    #[test_case(0 => "A"; "first column")]
    #[test_case(25 => "Z"; "last single letter")]
    #[test_case(26 => "AA"; "first double letter")]
    #[test_case(27 => "AB"; "second double letter")]
    fn spreadsheet_label_cases(index: usize) -> String {
        spreadsheet_label(index)
    }
}
