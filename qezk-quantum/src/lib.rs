//! # ⚛️ qezk-quantum — Two-Qubit Gate Algebra
//!
//! Implements the quantum core of the QE-ZK protocol: single-qubit
//! operators, tensor-product composition into the 4-dimensional
//! composite space, and construction of the four Bell states.
//!
//! ## Bell States
//!
//! ```text
//! |Φ+⟩ = (|00⟩ + |11⟩) / √2
//! |Φ-⟩ = (|00⟩ - |11⟩) / √2
//! |Ψ+⟩ = (|01⟩ + |10⟩) / √2
//! |Ψ-⟩ = (|01⟩ - |10⟩) / √2
//! ```
//!
//! All states are value types: every gate application returns a new
//! `StateVector` instead of mutating in place, so states can be shared
//! across parallel protocol runs without locking.

pub mod basis;
pub mod bell;
pub mod error;
pub mod gates;
pub mod state;

pub use basis::MeasurementBasis;
pub use bell::BellState;
pub use error::{QuantumError, QuantumResult};
pub use gates::{Gate, Matrix2, Matrix4, cnot, kron};
pub use state::{Qubit, StateVector};
