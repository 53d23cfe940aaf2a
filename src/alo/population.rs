//! Fixed-size antlion and ant populations.

use super::agents::{Ant, Antlion};
use super::config::AloConfig;
use crate::geo::Location;
use rand::Rng;

/// The two cooperating populations of one run.
///
/// Sizes are fixed at construction. Antlions are created before ants, so a
/// seeded run always draws the same initial tours.
#[derive(Debug, Clone)]
pub struct Population {
    antlions: Vec<Antlion>,
    ants: Vec<Ant>,
}

impl Population {
    /// Builds `config.num_antlions` antlions then `config.num_ants` ants,
    /// each on its own random tour.
    ///
    /// # Panics
    /// Panics if `config.num_antlions` is zero (call [`AloConfig::validate`]
    /// first).
    pub fn new<R: Rng>(config: &AloConfig, locations: &[Location], rng: &mut R) -> Self {
        assert!(config.num_antlions > 0, "population needs at least one antlion");
        let antlions = (0..config.num_antlions)
            .map(|_| Antlion::new(locations, rng))
            .collect();
        let ants = (0..config.num_ants)
            .map(|_| Ant::new(locations, rng))
            .collect();
        Self { antlions, ants }
    }

    /// Index of the antlion with the smallest personal-best distance.
    ///
    /// Ties go to the earliest antlion. O(population size).
    pub fn elite_index(&self) -> usize {
        let mut best = 0;
        for (i, lion) in self.antlions.iter().enumerate().skip(1) {
            if lion.best_distance() < self.antlions[best].best_distance() {
                best = i;
            }
        }
        best
    }

    /// The current elite antlion (see [`elite_index`](Self::elite_index)).
    pub fn elite_antlion(&self) -> &Antlion {
        &self.antlions[self.elite_index()]
    }

    pub fn antlions(&self) -> &[Antlion] {
        &self.antlions
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub(crate) fn antlions_mut(&mut self) -> &mut [Antlion] {
        &mut self.antlions
    }

    /// Every ant adopts a copy of the antlion at `elite`.
    pub(crate) fn ants_follow(&mut self, elite: usize) {
        let lion = &self.antlions[elite];
        for ant in &mut self.ants {
            ant.follow_elite(lion);
        }
    }
}
