//! Witness bitstring → gate sequence

use crate::error::{EncodingError, EncodingResult};
use qezk_quantum::{Gate, Qubit, StateVector};

/// Converts a witness bitstring into a gate sequence
///
/// The witness is partitioned into 3-bit groups, the last group
/// right-padded with '0'. Each group's value (0–7) indexes modulo 7
/// into the fixed library `[I, X, Y, Z, H, S, T]`, so the value 7 wraps
/// back to the identity.
///
/// An empty witness yields an empty sequence — the identity transform.
pub fn witness_to_gates(witness: &str) -> EncodingResult<Vec<Gate>> {
    for (position, character) in witness.chars().enumerate() {
        if character != '0' && character != '1' {
            return Err(EncodingError::InvalidWitnessBit {
                position,
                character,
            });
        }
    }

    let bits = witness.as_bytes();
    let mut gates = Vec::with_capacity(bits.len().div_ceil(3));

    for group in bits.chunks(3) {
        let mut value = 0usize;
        for slot in 0..3 {
            // Missing trailing bits count as '0'
            let bit = group.get(slot).map(|b| (b - b'0') as usize).unwrap_or(0);
            value = (value << 1) | bit;
        }
        gates.push(Gate::from_index(value));
    }

    Ok(gates)
}

/// Applies a gate sequence left-to-right to a copy of the state
///
/// Every gate acts on the first qubit, the prover's side of the pair.
pub fn apply_circuit(state: StateVector, gates: &[Gate]) -> StateVector {
    gates
        .iter()
        .fold(state, |acc, gate| acc.apply_single(&gate.matrix(), Qubit::First))
}

// =============================================================================
// Tests
// =============================================================================
