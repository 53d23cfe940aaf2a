//! Error type for optimizer setup.

use thiserror::Error;

/// Errors surfaced when starting a run.
///
/// All optimizer work is pure in-memory computation; the only failure is
/// a configuration rejected before any agent is created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AloError {
    /// A population size or iteration budget is zero, or the perturbation
    /// probability lies outside `[0, 1]`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
