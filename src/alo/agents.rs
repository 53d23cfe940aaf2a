//! Search agents: antlions and ants.
//!
//! Both agents own their tours outright. Anything crossing from one agent
//! to another is copied, never shared.

use crate::geo::Location;
use crate::tour::{is_permutation, Tour};
use rand::Rng;

/// An antlion: local stochastic search with elitist memory.
///
/// Each generation the live tour is perturbed by per-position random swaps
/// ([`perturb`](Self::perturb)), then compared against the personal best
/// ([`retain_if_better`](Self::retain_if_better)). The remembered best never
/// worsens.
#[derive(Debug, Clone)]
pub struct Antlion {
    position: Tour,
    best_position: Vec<usize>,
    best_distance: f64,
}

impl Antlion {
    /// Creates an antlion on a random tour. The personal best starts as a
    /// copy of that tour.
    pub fn new<R: Rng>(locations: &[Location], rng: &mut R) -> Self {
        let mut position = Tour::random(locations, rng);
        let best_distance = position.evaluate(locations);
        Self {
            best_position: position.order().to_vec(),
            position,
            best_distance,
        }
    }

    /// Per-position random swap mutation of the live tour with probability `p`.
    pub fn perturb<R: Rng>(&mut self, p: f64, rng: &mut R) {
        self.position.swap_mutate(p, rng);
    }

    /// Re-evaluates the live tour and adopts it as the personal best when it
    /// is strictly shorter.
    ///
    /// Returns `true` if the personal best improved.
    pub fn retain_if_better(&mut self, locations: &[Location]) -> bool {
        let current = self.position.evaluate(locations);
        if current < self.best_distance {
            self.best_distance = current;
            self.best_position.clear();
            self.best_position.extend_from_slice(self.position.order());
            debug_assert!(is_permutation(&self.best_position));
            true
        } else {
            false
        }
    }

    /// One generation of antlion work: [`perturb`](Self::perturb) then
    /// [`retain_if_better`](Self::retain_if_better).
    pub fn advance<R: Rng>(&mut self, p: f64, locations: &[Location], rng: &mut R) -> bool {
        self.perturb(p, rng);
        self.retain_if_better(locations)
    }

    /// The live (possibly worse than best) tour.
    pub fn position(&self) -> &Tour {
        &self.position
    }

    pub fn best_position(&self) -> &[usize] {
        &self.best_position
    }

    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }
}

/// An ant: pure exploitation.
///
/// Ants never search on their own. Every generation an ant discards its tour
/// and adopts a copy of the elite antlion's personal best.
#[derive(Debug, Clone)]
pub struct Ant {
    position: Vec<usize>,
    distance: f64,
}

impl Ant {
    /// Creates an ant on a random tour.
    ///
    /// The initial tour is a placeholder; the first generation overwrites it.
    pub fn new<R: Rng>(locations: &[Location], rng: &mut R) -> Self {
        let mut tour = Tour::random(locations, rng);
        let distance = tour.evaluate(locations);
        Self {
            position: tour.into_order(),
            distance,
        }
    }

    /// Replaces this ant's tour with a copy of `elite`'s personal best.
    pub fn follow_elite(&mut self, elite: &Antlion) {
        self.position.clone_from_slice(elite.best_position());
        self.distance = elite.best_distance();
        debug_assert!(is_permutation(&self.position));
    }

    pub fn position(&self) -> &[usize] {
        &self.position
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}
