//! Error types for qezk-measurement

use thiserror::Error;

/// Result alias for measurement and verification operations
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Errors raised by the verification-side checks
#[derive(Debug, Clone, Error)]
pub enum VerificationError {
    #[error("Result sequences differ in length: {prover} prover vs {verifier} verifier")]
    ResultLengthMismatch { prover: usize, verifier: usize },

    #[error("Basis sequence has {bases} entries for {results} results")]
    BasisLengthMismatch { results: usize, bases: usize },

    #[error("Measurement result at index {index} is {value}, expected 0 or 1")]
    NonBinaryResult { index: usize, value: u8 },

    #[error("CHSH value {0} is outside the admissible range [0, 3]")]
    ChshOutOfRange(f64),

    #[error("Cannot compute an agreement ratio over empty result sequences")]
    EmptyResults,
}
