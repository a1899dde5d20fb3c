//! Error types for qezk-quantum

use thiserror::Error;

/// Result alias for quantum state operations
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Errors that can occur while building quantum states
///
/// Shape errors of the original design (wrong vector length, wrong
/// operator dimensions, invalid target qubit) are unrepresentable here:
/// `StateVector` is a fixed 4-element array, operators are fixed-size
/// matrices and the target qubit is a closed enum.
#[derive(Debug, Clone, Error)]
pub enum QuantumError {
    #[error("State vector is not normalized: L2 norm is {0}")]
    NotNormalized(f64),
}
