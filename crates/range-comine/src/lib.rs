//! Range-based spatial co-location pattern mining: given spatial objects
//! labeled with categorical features and a distance interval, computes the
//! smallest distance threshold at which each feature-set pattern's
//! participation index first meets a prevalence threshold.

mod baselines;
mod cliques;
mod collist;
mod error;
mod geometry;
mod lattice;
mod neighbors;
mod object;
mod ordered;
mod participation;
mod pattern;

pub use baselines::{naive_range, range_inc_mining};
pub use cliques::{enumerate_size2, enumerate_size_k, Clique};
pub use collist::ColList;
pub use error::{validate_parameters, Error, Result};
pub use geometry::{diameter, dist};
pub use lattice::range_comine;
pub use neighbors::{Neighbor, StarNeighborhood};
pub use object::{Object, ObjectSet};
pub use ordered::OrderedDistance;
pub use participation::{critical_distance, participation_index};
pub use pattern::Pattern;
