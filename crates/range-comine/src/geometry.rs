//! Euclidean distance and clique diameter.

use crate::object::Object;

/// Euclidean distance between two objects, via a numerically stable
/// hypotenuse routine.
///
/// ```
/// use range_comine::{Object, dist};
///
/// let a = Object::new("a", "A", 0.0, 0.0);
/// let b = Object::new("b", "A", 3.0, 4.0);
/// assert!((dist(&a, &b) - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn dist(a: &Object, b: &Object) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// The diameter (maximum pairwise distance) of a set of objects. `0.0` for
/// zero or one objects.
pub fn diameter(objects: &[&Object]) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            let d = dist(objects[i], objects[j]);
            if d > max {
                max = d;
            }
        }
    }
    max
}
