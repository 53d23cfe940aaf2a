//! ALO configuration.
//!
//! [`AloConfig`] holds every parameter that controls a run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Ant Lion Optimizer.
///
/// # Defaults
///
/// ```
/// use u_antlion::alo::AloConfig;
///
/// let config = AloConfig::default();
/// assert_eq!(config.num_antlions, 50);
/// assert_eq!(config.num_ants, 50);
/// assert_eq!(config.max_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antlion::alo::AloConfig;
///
/// let config = AloConfig::default()
///     .with_num_antlions(10)
///     .with_num_ants(10)
///     .with_max_iterations(20)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AloConfig {
    /// Number of antlions (agents doing the actual search).
    pub num_antlions: usize,

    /// Number of ants. Ants copy the elite antlion every generation.
    pub num_ants: usize,

    /// Fixed generation budget. There is no stagnation-based early exit.
    pub max_iterations: usize,

    /// Per-position swap probability used by antlion perturbation (0.0–1.0).
    pub perturbation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to perturb antlions in parallel using rayon.
    ///
    /// Only honored with the `parallel` cargo feature. Results do not depend
    /// on this flag.
    pub parallel: bool,
}

impl Default for AloConfig {
    fn default() -> Self {
        Self {
            num_antlions: 50,
            num_ants: 50,
            max_iterations: 100,
            perturbation_probability: 0.2,
            seed: None,
            parallel: false,
        }
    }
}

impl AloConfig {
    pub fn with_num_antlions(mut self, n: usize) -> Self {
        self.num_antlions = n;
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the per-position swap probability.
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_perturbation_probability(mut self, p: f64) -> Self {
        self.perturbation_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_antlions == 0 {
            return Err("num_antlions must be at least 1".into());
        }
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        // Written so NaN fails too.
        if !(0.0..=1.0).contains(&self.perturbation_probability) {
            return Err(format!(
                "perturbation_probability must be in [0, 1], got {}",
                self.perturbation_probability
            ));
        }
        Ok(())
    }
}
