//! Error types for qezk-protocol

use crate::session::Phase;
use qezk_encoding::EncodingError;
use qezk_entanglement::{EntanglementError, Role};
use qezk_measurement::VerificationError;
use thiserror::Error;

/// Result alias for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Constructor-parameter errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("num_pairs must be at least 1")]
    NoPairs,

    #[error("num_pairs {requested} exceeds the cap of {max}")]
    TooManyPairs { requested: usize, max: usize },

    #[error("chsh_threshold {0} is outside the valid range [0, 3]")]
    ThresholdOutOfRange(f64),
}

/// Errors that abort a protocol run
///
/// Any of these aborts the whole `prove()` call immediately; the
/// protocol performs no retries and returns no partial proof.
#[derive(Debug, Clone, Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Entanglement(#[from] EntanglementError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error("Statement must not be empty")]
    EmptyStatement,

    #[error("Session is in phase {actual}, but this operation requires {expected}")]
    PhaseOrder { expected: Phase, actual: Phase },

    #[error("Operation requires the {expected:?} share, got the {actual:?} share")]
    WrongShare { expected: Role, actual: Role },

    #[error("Supplied basis at index {index} does not match the statement-derived basis")]
    BasisMismatch { index: usize },
}
