//! Error types for qezk-encoding

use thiserror::Error;

/// Result alias for encoding operations
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors that can occur while encoding witnesses or statements
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    #[error("Witness must be a binary string, found '{character}' at position {position}")]
    InvalidWitnessBit { position: usize, character: char },

    #[error("Measurement count must be at least 1, got {0}")]
    InvalidCount(usize),
}
