//! Tour representation: a visiting order over location indices.
//!
//! A [`Tour`] is a permutation of `0..n` that is implicitly closed (the last
//! location connects back to the first). Its length is cached and dropped
//! whenever the order changes, so a stale value can never be read.
//!
//! # Invariant
//!
//! Every tour contains each index in `0..n` exactly once. The only mutation
//! exposed is [`Tour::swap`], which preserves this automatically. Debug
//! builds re-check the invariant after every mutation.

use crate::geo::{haversine_km, Location};
use crate::random::shuffle;
use rand::Rng;

/// Closed-loop length of `order` over `locations`, in kilometres.
///
/// Sums the consecutive legs plus the leg from the last location back to
/// the first. Orders of length 0 or 1 have length 0.
///
/// # Panics
/// Panics if any index in `order` is out of bounds for `locations`.
pub fn closed_length(order: &[usize], locations: &[Location]) -> f64 {
    let n = order.len();
    if n <= 1 {
        return 0.0;
    }
    let open: f64 = order
        .windows(2)
        .map(|w| haversine_km(&locations[w[0]], &locations[w[1]]))
        .sum();
    open + haversine_km(&locations[order[n - 1]], &locations[order[0]])
}

/// Uniformly random permutation of `0..n` (Fisher–Yates).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    shuffle(&mut order, rng);
    order
}

/// Whether `order` contains each of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &v in order {
        match seen.get_mut(v) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Coordinates of a closed route as `(latitude, longitude)` pairs.
///
/// The first location is repeated at the end so that a polyline renderer
/// draws the closing leg. Empty orders give an empty path. Indices with no
/// matching location are skipped.
pub fn closed_path(order: &[usize], locations: &[Location]) -> Vec<(f64, f64)> {
    let mut path: Vec<(f64, f64)> = order
        .iter()
        .filter_map(|&i| locations.get(i))
        .map(|l| (l.latitude, l.longitude))
        .collect();
    if let Some(&first) = path.first() {
        path.push(first);
    }
    path
}

/// A visiting order with a lazily cached closed-loop length.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    distance: Option<f64>,
}

impl Tour {
    /// Builds a tour and evaluates its length.
    ///
    /// # Panics
    /// Debug builds panic if `order` is not a permutation.
    pub fn new(order: Vec<usize>, locations: &[Location]) -> Self {
        debug_assert!(is_permutation(&order), "not a permutation: {order:?}");
        let distance = closed_length(&order, locations);
        Self {
            order,
            distance: Some(distance),
        }
    }

    /// Random tour over all of `locations`, already evaluated.
    pub fn random<R: Rng>(locations: &[Location], rng: &mut R) -> Self {
        Self::new(random_permutation(locations.len(), rng), locations)
    }

    /// The visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cached length, or `None` if the order changed since the last
    /// [`evaluate`](Self::evaluate).
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Returns the closed-loop length, recomputing it if stale.
    pub fn evaluate(&mut self, locations: &[Location]) -> f64 {
        match self.distance {
            Some(d) => d,
            None => {
                let d = closed_length(&self.order, locations);
                self.distance = Some(d);
                d
            }
        }
    }

    /// Exchanges the locations at positions `i` and `j`.
    ///
    /// Invalidates the cached length unless `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.order.swap(i, j);
            self.distance = None;
        }
    }

    /// Per-position random swap mutation.
    ///
    /// Each position `i` independently, with probability `p`, is swapped
    /// with a uniformly drawn position `j` in `0..n` (`j == i` is a no-op).
    /// Up to `n` swaps are performed per call.
    pub fn swap_mutate<R: Rng>(&mut self, p: f64, rng: &mut R) {
        let n = self.order.len();
        for i in 0..n {
            if rng.random_range(0.0..1.0) < p {
                let j = rng.random_range(0..n);
                self.swap(i, j);
            }
        }
        debug_assert!(is_permutation(&self.order), "mutation broke tour: {:?}", self.order);
    }

    /// Overwrites this tour with a copy of `other`, reusing the allocation.
    pub fn copy_from(&mut self, other: &Tour) {
        self.order.clone_from(&other.order);
        self.distance = other.distance;
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}
