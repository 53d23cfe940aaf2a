//! ALO generation loop.
//!
//! [`AloController`] owns everything a run touches (locations, population,
//! global best, RNG) and advances one synchronous generation per
//! [`step`](AloController::step):
//!
//! 1. Every ant adopts a copy of the elite antlion from the *previous*
//!    generation (the initial random elite on generation 0).
//! 2. Every antlion perturbs its tour, then keeps it if it beats its best.
//! 3. The elite is recomputed.
//! 4. The global best is replaced if the elite is strictly shorter.
//! 5. The global best distance is appended to the history and reported.
//! 6. The generation counter advances; at `max_iterations` the run converges.
//!
//! [`AloRunner`] wraps the controller for one-shot runs.

use super::agents::Antlion;
use super::config::AloConfig;
use super::population::Population;
use super::sink::{GenerationReport, ResultSink};
use super::tracker::GlobalBest;
use crate::error::AloError;
use crate::geo::{Location, LocationSource};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No population, no global best.
    Idle,
    /// Generations may be stepped.
    Running,
    /// The generation budget was exhausted.
    Converged,
    /// Stopped early via [`AloController::stop`].
    Stopped,
}

impl RunState {
    /// Whether the run has ended. A new run needs a fresh `start`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Converged | RunState::Stopped)
    }
}

/// Result of an ALO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AloResult {
    /// Best visiting order found.
    pub best_tour: Vec<usize>,

    /// Closed-loop length of `best_tour`, in kilometres.
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was stopped before the generation budget ran out.
    pub cancelled: bool,

    /// Global best distance at the end of each generation.
    pub distance_history: Vec<f64>,
}

/// Stateful driver for one run at a time.
///
/// # Usage
///
/// ```
/// use u_antlion::alo::{AloConfig, AloController, HistorySink, RunState};
/// use u_antlion::geo::EastJava;
///
/// let mut controller = AloController::from_source(&EastJava);
/// controller
///     .start(AloConfig::default().with_max_iterations(10).with_seed(42))
///     .unwrap();
///
/// let mut chart = HistorySink::new();
/// let steps = controller.run_to_end(&mut chart);
///
/// assert_eq!(steps, 10);
/// assert_eq!(controller.state(), RunState::Converged);
/// assert_eq!(chart.points().len(), 10);
/// ```
#[derive(Debug)]
pub struct AloController {
    locations: Vec<Location>,
    config: AloConfig,
    state: RunState,
    population: Option<Population>,
    global_best: GlobalBest,
    generation: usize,
    history: Vec<f64>,
    rng: StdRng,
}

impl AloController {
    /// Creates an idle controller over a fixed location sequence.
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            config: AloConfig::default(),
            state: RunState::Idle,
            population: None,
            global_best: GlobalBest::new(),
            generation: 0,
            history: Vec::new(),
            rng: create_rng(0),
        }
    }

    /// Creates an idle controller, asking `source` for the locations once.
    pub fn from_source<S: LocationSource + ?Sized>(source: &S) -> Self {
        Self::new(source.locations())
    }

    /// Starts a fresh run.
    ///
    /// The configuration is validated before anything else happens; on
    /// error the controller is left untouched. Calling `start` on a running
    /// or finished controller discards the previous run.
    pub fn start(&mut self, config: AloConfig) -> Result<(), AloError> {
        config.validate().map_err(AloError::InvalidConfiguration)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        self.rng = create_rng(seed);
        self.population = Some(Population::new(&config, &self.locations, &mut self.rng));
        self.global_best.reset();
        self.generation = 0;
        self.history = Vec::with_capacity(config.max_iterations);
        self.state = RunState::Running;

        log::info!(
            "ALO run started: {} locations, {} antlions, {} ants, {} iterations, seed {}",
            self.locations.len(),
            config.num_antlions,
            config.num_ants,
            config.max_iterations,
            seed
        );
        if self.locations.len() <= 1 {
            log::debug!("degenerate instance: every tour has length 0");
        }

        self.config = config;
        Ok(())
    }

    /// Runs one generation and reports it to `sink`.
    ///
    /// Returns `None` (doing nothing) unless the controller is
    /// [`RunState::Running`].
    pub fn step<S: ResultSink + ?Sized>(&mut self, sink: &mut S) -> Option<GenerationReport> {
        if self.state != RunState::Running {
            return None;
        }
        let population = self.population.as_mut()?;
        let generation = self.generation;

        // Ants read the elite before any antlion moves this generation.
        let prior_elite = population.elite_index();
        population.ants_follow(prior_elite);

        let seeds: Vec<u64> = (0..population.antlions().len())
            .map(|_| self.rng.random())
            .collect();
        advance_antlions(
            population.antlions_mut(),
            &seeds,
            self.config.perturbation_probability,
            &self.locations,
            self.config.parallel,
        );

        let elite = population.elite_antlion();
        if self
            .global_best
            .offer(elite.best_position(), elite.best_distance())
        {
            log::trace!(
                "generation {generation}: new global best {:.4} km",
                self.global_best.distance()
            );
        }

        let best_distance = self.global_best.distance();
        self.history.push(best_distance);
        let report = GenerationReport {
            generation,
            best_distance,
            best_tour: self.global_best.tour().unwrap_or_default().to_vec(),
        };
        log::debug!("generation {generation}: best {best_distance:.4} km");
        sink.on_generation(&report);

        self.generation += 1;
        if self.generation >= self.config.max_iterations {
            self.state = RunState::Converged;
            log::info!(
                "ALO run converged after {} generations: best {:.4} km",
                self.generation,
                best_distance
            );
        }
        Some(report)
    }

    /// Runs up to `n` generations. Returns how many actually ran.
    pub fn run<S: ResultSink + ?Sized>(&mut self, n: usize, sink: &mut S) -> usize {
        let mut done = 0;
        while done < n && self.step(sink).is_some() {
            done += 1;
        }
        done
    }

    /// Runs until the generation budget is exhausted or the run is stopped.
    pub fn run_to_end<S: ResultSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut done = 0;
        while self.step(sink).is_some() {
            done += 1;
        }
        done
    }

    /// Stops a running run between generations. No effect otherwise.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            log::info!("ALO run stopped after {} generations", self.generation);
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of generations completed in the current run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Global best distance after each completed generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn global_best(&self) -> &GlobalBest {
        &self.global_best
    }

    /// The live population, absent while idle.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Configuration of the current (or last) run.
    pub fn config(&self) -> &AloConfig {
        &self.config
    }

    /// Best result so far, or `None` while idle.
    ///
    /// Before the first generation completes, the initial elite antlion
    /// stands in for the (still empty) global best.
    pub fn result(&self) -> Option<AloResult> {
        let population = self.population.as_ref()?;
        let (best_tour, best_distance) = match self.global_best.tour() {
            Some(tour) => (tour.to_vec(), self.global_best.distance()),
            None => {
                let elite = population.elite_antlion();
                (elite.best_position().to_vec(), elite.best_distance())
            }
        };
        Some(AloResult {
            best_tour,
            best_distance,
            generations: self.generation,
            cancelled: self.state == RunState::Stopped,
            distance_history: self.history.clone(),
        })
    }
}

/// Perturb-then-retain for every antlion, each with its own RNG seeded from
/// `seeds`, so the outcome does not depend on `parallel`.
fn advance_antlions(
    antlions: &mut [Antlion],
    seeds: &[u64],
    p: f64,
    locations: &[Location],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            antlions
                .par_iter_mut()
                .zip(seeds.par_iter())
                .for_each(|(lion, &seed)| {
                    lion.advance(p, locations, &mut create_rng(seed));
                });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for (lion, &seed) in antlions.iter_mut().zip(seeds) {
        lion.advance(p, locations, &mut create_rng(seed));
    }
}

/// Executes a complete ALO run.
pub struct AloRunner;

impl AloRunner {
    /// Runs ALO over `locations` until the generation budget is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_antlion::alo::{AloConfig, AloRunner, NullSink};
    /// use u_antlion::geo::east_java;
    ///
    /// let config = AloConfig::default().with_max_iterations(25).with_seed(7);
    /// let result = AloRunner::run(east_java(), &config, &mut NullSink).unwrap();
    /// assert_eq!(result.generations, 25);
    /// assert_eq!(result.best_tour.len(), 10);
    /// ```
    pub fn run<S: ResultSink + ?Sized>(
        locations: Vec<Location>,
        config: &AloConfig,
        sink: &mut S,
    ) -> Result<AloResult, AloError> {
        Self::run_with_cancel(locations, config, sink, None)
    }

    /// Runs ALO with an optional cancellation token.
    ///
    /// The flag is checked between generations. Once it is set the run
    /// stops and the best result so far is returned with `cancelled = true`.
    pub fn run_with_cancel<S: ResultSink + ?Sized>(
        locations: Vec<Location>,
        config: &AloConfig,
        sink: &mut S,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AloResult, AloError> {
        let mut controller = AloController::new(locations);
        controller.start(config.clone())?;

        while controller.state() == RunState::Running {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    controller.stop();
                    break;
                }
            }
            controller.step(sink);
        }

        Ok(controller
            .result()
            .expect("started controller always has a population"))
    }
}

// ============================================================================
// Tests
// ============================================================================
