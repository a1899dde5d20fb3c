//! Immutable 2-qubit state vectors

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Matrix2, Matrix4, kron};
use num_complex::Complex64;

/// Which qubit of a pair an operator acts on
///
/// In the protocol the prover holds the first qubit of every EPR pair
/// and the verifier holds the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Qubit {
    /// First qubit (prover side)
    First,
    /// Second qubit (verifier side)
    Second,
}

/// 4-dimensional complex state vector over the composite 2-qubit space
///
/// Basis ordering: index `2*q0 + q1`, so the amplitudes are
/// (|00⟩, |01⟩, |10⟩, |11⟩).
///
/// States are never mutated in place: every transform consumes the
/// value and returns a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateVector {
    amplitudes: [Complex64; 4],
}

impl StateVector {
    /// Creates a state from raw amplitudes without checking the norm
    pub fn new(amplitudes: [Complex64; 4]) -> Self {
        Self { amplitudes }
    }

    /// Creates a state from raw amplitudes, requiring unit L2 norm (±1e-9)
    pub fn try_new(amplitudes: [Complex64; 4]) -> QuantumResult<Self> {
        let state = Self { amplitudes };
        if !state.is_normalized() {
            return Err(QuantumError::NotNormalized(state.norm()));
        }
        Ok(state)
    }

    /// The |00⟩ state
    pub fn zero() -> Self {
        let mut amplitudes = [Complex64::new(0.0, 0.0); 4];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self { amplitudes }
    }

    /// Raw amplitudes (|00⟩, |01⟩, |10⟩, |11⟩)
    pub fn amplitudes(&self) -> &[Complex64; 4] {
        &self.amplitudes
    }

    /// Single amplitude by composite index
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Whether the L2 norm is 1 within ±1e-9
    pub fn is_normalized(&self) -> bool {
        (self.norm() - 1.0).abs() < 1e-9
    }

    /// Divides by the L2 norm
    ///
    /// Norms below 1e-10 leave the state unchanged to avoid division
    /// blow-up on near-null vectors.
    pub fn normalized(self) -> Self {
        let norm = self.norm();
        if norm <= 1e-10 {
            return self;
        }
        let mut amplitudes = self.amplitudes;
        for amp in &mut amplitudes {
            *amp /= norm;
        }
        Self { amplitudes }
    }

    /// Applies a full 4x4 operator, returning the new state
    pub fn apply(self, operator: &Matrix4) -> Self {
        Self {
            amplitudes: operator.apply(self.amplitudes),
        }
    }

    /// Applies a single-qubit operator to one qubit of the pair
    ///
    /// The 2x2 operator is tensor-embedded into the 4x4 space with
    /// identity on the other qubit, then left-multiplied.
    pub fn apply_single(self, operator: &Matrix2, qubit: Qubit) -> Self {
        let identity = Matrix2::identity();
        let embedded = match qubit {
            Qubit::First => kron(operator, &identity),
            Qubit::Second => kron(&identity, operator),
        };
        self.apply(&embedded)
    }

    /// Inner product ⟨self|other⟩
    pub fn overlap(&self, other: &Self) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Squared overlap |⟨self|other⟩|², the fidelity between pure states
    pub fn fidelity(&self, other: &Self) -> f64 {
        self.overlap(other).norm_sqr()
    }
}

// =============================================================================
// Tests
// =============================================================================
