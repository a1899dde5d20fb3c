//! Single-qubit gate library and complex matrix algebra
//!
//! Implements the fixed operator set of the protocol:
//!
//! - **Single-qubit**: I, X, Y, Z (Pauli), H (Hadamard), S, T (phase)
//! - **Two-qubit**: CNOT
//!
//! The seven single-qubit gates are ordered so that
//! [`Gate::from_index`] matches the witness-encoding table.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

/// 2x2 complex matrix for single-qubit gates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2 {
    /// Elements: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2 {
    /// Identity matrix
    pub fn identity() -> Self {
        Self {
            elements: [
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            ],
        }
    }

    /// Matrix product
    pub fn mul(&self, other: &Matrix2) -> Matrix2 {
        let mut out = [[Complex64::new(0.0, 0.0); 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.elements[i][0] * other.elements[0][j]
                    + self.elements[i][1] * other.elements[1][j];
            }
        }
        Matrix2 { elements: out }
    }

    /// Conjugate transpose (dagger)
    pub fn dagger(&self) -> Matrix2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }

    /// Checks unitarity: M · M† = I
    pub fn is_unitary(&self) -> bool {
        let product = self.mul(&self.dagger());
        let [[a, b], [c, d]] = product.elements;
        (a - Complex64::new(1.0, 0.0)).norm_sqr() < 1e-10
            && b.norm_sqr() < 1e-10
            && c.norm_sqr() < 1e-10
            && (d - Complex64::new(1.0, 0.0)).norm_sqr() < 1e-10
    }
}

/// 4x4 complex matrix over the composite 2-qubit space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    pub elements: [[Complex64; 4]; 4],
}

impl Matrix4 {
    /// Applies the matrix to a 4-element amplitude vector
    pub fn apply(&self, amplitudes: [Complex64; 4]) -> [Complex64; 4] {
        let mut out = [Complex64::new(0.0, 0.0); 4];
        for (i, slot) in out.iter_mut().enumerate() {
            for (j, amp) in amplitudes.iter().enumerate() {
                *slot += self.elements[i][j] * amp;
            }
        }
        out
    }
}

/// Tensor product a ⊗ b, embedding two 2x2 operators into the 4x4 space
///
/// Index convention: basis state |q0 q1⟩ maps to index `2*q0 + q1`,
/// so `kron(g, identity)` acts on the first qubit and
/// `kron(identity, g)` on the second.
pub fn kron(a: &Matrix2, b: &Matrix2) -> Matrix4 {
    let mut out = [[Complex64::new(0.0, 0.0); 4]; 4];
    for ia in 0..2 {
        for ja in 0..2 {
            for ib in 0..2 {
                for jb in 0..2 {
                    out[2 * ia + ib][2 * ja + jb] = a.elements[ia][ja] * b.elements[ib][jb];
                }
            }
        }
    }
    Matrix4 { elements: out }
}

/// CNOT gate with the first qubit as control
pub fn cnot() -> Matrix4 {
    let o = Complex64::new(0.0, 0.0);
    let l = Complex64::new(1.0, 0.0);
    Matrix4 {
        elements: [
            [l, o, o, o],
            [o, l, o, o],
            [o, o, o, l],
            [o, o, l, o],
        ],
    }
}

/// Single-qubit gate from the fixed protocol library
///
/// Ordering matters: the witness encoder selects gates by index into
/// [`Gate::LIBRARY`], so the declaration order is part of the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gate {
    /// Identity
    #[default]
    I,
    /// Pauli-X (quantum NOT)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard
    H,
    /// S (√Z phase)
    S,
    /// T (π/8 phase)
    T,
}

impl Gate {
    /// The fixed 7-gate library, in encoding order
    pub const LIBRARY: [Gate; 7] = [
        Gate::I,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::T,
    ];

    /// Selects a gate by index, modulo the library size
    pub fn from_index(index: usize) -> Self {
        Self::LIBRARY[index % Self::LIBRARY.len()]
    }

    /// Gate name
    pub fn name(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::T => "T",
        }
    }

    /// 2x2 matrix of the gate
    pub fn matrix(&self) -> Matrix2 {
        let o = Complex64::new(0.0, 0.0);
        let l = Complex64::new(1.0, 0.0);
        match self {
            Self::I => Matrix2::identity(),
            Self::X => Matrix2 {
                elements: [[o, l], [l, o]],
            },
            Self::Y => Matrix2 {
                elements: [
                    [o, Complex64::new(0.0, -1.0)],
                    [Complex64::new(0.0, 1.0), o],
                ],
            },
            Self::Z => Matrix2 {
                elements: [[l, o], [o, Complex64::new(-1.0, 0.0)]],
            },
            Self::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                Matrix2 {
                    elements: [[h, h], [h, -h]],
                }
            }
            Self::S => Matrix2 {
                elements: [[l, o], [o, Complex64::new(0.0, 1.0)]],
            },
            Self::T => Matrix2 {
                elements: [[l, o], [o, Complex64::from_polar(1.0, FRAC_PI_4)]],
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
