//! The four canonical Bell states
//!
//! ```text
//! |Φ+⟩ = (|00⟩ + |11⟩) / √2
//! |Φ-⟩ = (|00⟩ - |11⟩) / √2
//! |Ψ+⟩ = (|01⟩ + |10⟩) / √2
//! |Ψ-⟩ = (|01⟩ - |10⟩) / √2
//! ```
//!
//! Each state is built by the standard circuit — Hadamard on the first
//! qubit of |00⟩ followed by CNOT — which yields |Φ+⟩; the remaining
//! three are reached with one extra Pauli gate on the first qubit.

use crate::gates::{Gate, cnot};
use crate::state::{Qubit, StateVector};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// One of the four maximally-entangled Bell states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BellState {
    /// |Φ+⟩ = (|00⟩ + |11⟩) / √2
    #[default]
    PhiPlus,
    /// |Φ-⟩ = (|00⟩ - |11⟩) / √2
    PhiMinus,
    /// |Ψ+⟩ = (|01⟩ + |10⟩) / √2
    PsiPlus,
    /// |Ψ-⟩ = (|01⟩ - |10⟩) / √2
    PsiMinus,
}

impl BellState {
    /// All four Bell states in classification order
    pub const ALL: [BellState; 4] = [
        BellState::PhiPlus,
        BellState::PhiMinus,
        BellState::PsiPlus,
        BellState::PsiMinus,
    ];

    /// Builds the state through the gate circuit: H on the first qubit
    /// of |00⟩, then CNOT, then the per-kind Pauli correction
    ///
    /// |Ψ-⟩ carries a global phase of -i from the Y gate; global phase
    /// has no observable effect and fidelity against the canonical
    /// vector is still 1.
    pub fn state_vector(&self) -> StateVector {
        let phi_plus = StateVector::zero()
            .apply_single(&Gate::H.matrix(), Qubit::First)
            .apply(&cnot());

        match self {
            Self::PhiPlus => phi_plus,
            Self::PhiMinus => phi_plus.apply_single(&Gate::Z.matrix(), Qubit::First),
            Self::PsiPlus => phi_plus.apply_single(&Gate::X.matrix(), Qubit::First),
            Self::PsiMinus => phi_plus.apply_single(&Gate::Y.matrix(), Qubit::First),
        }
    }

    /// Canonical amplitude vector, phase-free, used as the
    /// classification reference
    pub fn canonical_vector(&self) -> StateVector {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let o = Complex64::new(0.0, 0.0);
        let amplitudes = match self {
            Self::PhiPlus => [h, o, o, h],
            Self::PhiMinus => [h, o, o, -h],
            Self::PsiPlus => [o, h, h, o],
            Self::PsiMinus => [o, h, -h, o],
        };
        StateVector::new(amplitudes)
    }

    /// Name in bra-ket notation
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhiPlus => "|Φ+⟩",
            Self::PhiMinus => "|Φ-⟩",
            Self::PsiPlus => "|Ψ+⟩",
            Self::PsiMinus => "|Ψ-⟩",
        }
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
