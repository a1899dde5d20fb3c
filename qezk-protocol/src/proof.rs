//! Proof record and verification verdict

use qezk_quantum::MeasurementBasis;
use serde::{Deserialize, Serialize};

/// Outcome of the verification phase
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Entanglement test and agreement check both passed
    pub is_valid: bool,
    /// |S| of the CHSH statistic
    pub chsh_value: f64,
    /// Raw bit-agreement ratio between the parties
    pub agreement: f64,
}

/// Complete record of one QE-ZK proof run
///
/// Constructed once per `prove()` call, immutable afterward, owned
/// exclusively by the caller. External transport layers translate this
/// record into their own message formats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    /// Prover's measurement results, one bit per pair
    pub prover_results: Vec<u8>,
    /// Verifier's measurement results, one bit per pair
    pub verifier_results: Vec<u8>,
    /// Statement-derived bases, shared by both parties
    pub bases: Vec<MeasurementBasis>,
    /// |S| of the CHSH statistic
    pub chsh_value: f64,
    /// Verification verdict
    pub is_valid: bool,
    /// The public statement this proof is about
    pub statement: String,
}
