//! Measurement bases shared across the protocol
//!
//! The same basis value must be used by prover and verifier at a given
//! measurement index; this identity is a protocol invariant, so the
//! type lives in the base crate where every component can name it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement basis for a single projective measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MeasurementBasis {
    /// Computational basis
    #[default]
    Z,
    /// Hadamard (diagonal) basis
    X,
    /// Circular basis
    Y,
}

impl MeasurementBasis {
    /// All recognized bases
    pub const ALL: [MeasurementBasis; 3] =
        [MeasurementBasis::Z, MeasurementBasis::X, MeasurementBasis::Y];

    /// Basis symbol
    pub fn name(&self) -> &'static str {
        match self {
            Self::Z => "Z",
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    /// Whether this basis participates in the CHSH statistic
    ///
    /// The CHSH table is built over {Z, X} only; Y-basis samples are
    /// skipped by the correlation accumulator.
    pub fn in_chsh_pair(&self) -> bool {
        matches!(self, Self::Z | Self::X)
    }
}

impl fmt::Display for MeasurementBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
