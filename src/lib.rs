//! Ant Lion Optimizer for the closed-loop geographic Travelling Salesman
//! Problem.
//!
//! Given N labelled locations with latitude/longitude, the optimizer evolves
//! permutation tours generation by generation, tracks the shortest closed
//! tour found, and reports progress after every generation.
//!
//! - [`geo`]: locations, haversine distance, location sources
//! - [`tour`]: permutation tours and closed-loop length
//! - [`random`]: seeded RNG and Fisher–Yates shuffle
//! - [`alo`]: agents, populations, the generation loop and result sinks
//!
//! # Example
//!
//! ```
//! use u_antlion::alo::{AloConfig, AloRunner, HistorySink};
//! use u_antlion::geo::east_java;
//!
//! let config = AloConfig::default().with_seed(42);
//! let mut chart = HistorySink::new();
//! let result = AloRunner::run(east_java(), &config, &mut chart).unwrap();
//!
//! assert_eq!(result.generations, 100);
//! assert_eq!(chart.points().len(), 100);
//! ```
//!
//! # Architecture
//!
//! Runs are single-threaded and synchronous per generation. All run state
//! lives in an [`alo::AloController`], so independent runs can coexist, and
//! every random draw flows from one explicitly seeded RNG. Drawing maps,
//! charts and pacing the display are left to [`alo::ResultSink`]
//! implementations.

pub mod alo;
pub mod error;
pub mod geo;
pub mod random;
pub mod tour;

pub use error::AloError;
