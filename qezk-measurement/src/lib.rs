//! # 📐 qezk-measurement — Born-Rule Measurement and CHSH
//!
//! The measurement apparatus of the QE-ZK protocol: basis-specific
//! projective measurement with Born-rule sampling, classification of
//! states against the four canonical Bell vectors, and the CHSH
//! correlation statistic.
//!
//! ## CHSH bounds
//!
//! ```text
//! S = E[Z,Z] − E[Z,X] + E[X,Z] + E[X,X]
//! classical:  |S| ≤ 2
//! quantum:    |S| ≤ 2√2 ≈ 2.828
//! ```
//!
//! This crate only needs raw state vectors and basis matrices; it knows
//! nothing about pair registries or protocol phases.

pub mod chsh;
pub mod error;
pub mod measure;

pub use chsh::{ChshOutcome, CorrelationTable, agreement_ratio, chsh_statistic, validate_binary};
pub use error::{VerificationError, VerificationResult};
pub use measure::{basis_transform, classify_bell_state, measure};
