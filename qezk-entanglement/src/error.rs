//! Error types for qezk-entanglement

use crate::registry::PairId;
use thiserror::Error;

/// Result alias for entanglement operations
pub type EntanglementResult<T> = Result<T, EntanglementError>;

/// Errors that can occur in EPR generation or distribution
#[derive(Debug, Clone, Error)]
pub enum EntanglementError {
    #[error("Requested pair count must be at least 1")]
    NoPairs,

    #[error("Requested {requested} pairs, but the source is capped at {max}")]
    TooManyPairs { requested: usize, max: usize },

    #[error("Generated {generated} pairs, expected {requested}")]
    PairCountMismatch { requested: usize, generated: usize },

    #[error("Pair {0} is not registered in this session")]
    PairNotFound(PairId),
}
