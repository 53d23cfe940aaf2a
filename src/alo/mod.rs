//! Ant Lion Optimizer (ALO) for closed-loop TSP.
//!
//! Two fixed-size populations cooperate over permutation tours:
//!
//! - **Antlions** do the search. Each generation an antlion swaps every
//!   tour position with a random partner with probability `p`, then keeps
//!   the result only if it is strictly shorter than its personal best.
//! - **Ants** exploit. Each generation every ant adopts a copy of the elite
//!   antlion's best tour (the elite from *before* that generation's
//!   antlion moves). Ants never explore and never feed back into the
//!   antlions.
//!
//! The elite is the antlion with the smallest personal best (first wins
//! ties). A monotone [`GlobalBest`] records the shortest tour ever seen.
//!
//! # Key Types
//!
//! - [`AloConfig`]: population sizes, generation budget, swap probability, seed
//! - [`AloController`]: stateful, step-at-a-time driver (`Idle → Running → Converged/Stopped`)
//! - [`AloRunner`]: one-shot run with optional cancellation
//! - [`ResultSink`]: per-generation report consumer
//!
//! # References
//!
//! - Mirjalili (2015), "The Ant Lion Optimizer", *Advances in Engineering Software* 83, 80-98

mod agents;
mod config;
mod population;
mod runner;
mod sink;
mod tracker;

pub use agents::{Ant, Antlion};
pub use config::AloConfig;
pub use population::Population;
pub use runner::{AloController, AloResult, AloRunner, RunState};
pub use sink::{ChannelSink, GenerationReport, HistorySink, LogSink, NullSink, ResultSink, RouteSink};
pub use tracker::GlobalBest;
