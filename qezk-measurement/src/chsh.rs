//! CHSH correlation statistic

use crate::error::{VerificationError, VerificationResult};
use qezk_quantum::MeasurementBasis;
use serde::{Deserialize, Serialize};

/// 2x2 correlation table over the {Z, X} basis pair
///
/// Cell `(a, b)` holds the mean agreement (+1 same outcome, −1
/// different) of all samples where the prover measured in `a` and the
/// verifier in `b`. Cells without samples stay at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationTable {
    values: [[f64; 2]; 2],
    counts: [[usize; 2]; 2],
}

impl CorrelationTable {
    fn index(basis: MeasurementBasis) -> Option<usize> {
        match basis {
            MeasurementBasis::Z => Some(0),
            MeasurementBasis::X => Some(1),
            MeasurementBasis::Y => None,
        }
    }

    /// Mean correlation for a basis pair; 0 when the pair never occurred
    pub fn value(&self, prover: MeasurementBasis, verifier: MeasurementBasis) -> f64 {
        match (Self::index(prover), Self::index(verifier)) {
            (Some(a), Some(b)) => self.values[a][b],
            _ => 0.0,
        }
    }

    /// Sample count for a basis pair
    pub fn count(&self, prover: MeasurementBasis, verifier: MeasurementBasis) -> usize {
        match (Self::index(prover), Self::index(verifier)) {
            (Some(a), Some(b)) => self.counts[a][b],
            _ => 0,
        }
    }
}

/// CHSH statistic together with its correlation table
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChshOutcome {
    /// |S| where S = E[Z,Z] − E[Z,X] + E[X,Z] + E[X,X]
    pub value: f64,
    /// The per-cell correlations behind the statistic
    pub table: CorrelationTable,
}

/// Computes the CHSH statistic over two result/basis sequences
///
/// Only indices where both bases are in {Z, X} contribute; Y-basis
/// samples are skipped, following the standard two-setting CHSH form.
pub fn chsh_statistic(
    prover_results: &[u8],
    verifier_results: &[u8],
    prover_bases: &[MeasurementBasis],
    verifier_bases: &[MeasurementBasis],
) -> VerificationResult<ChshOutcome> {
    if prover_results.len() != verifier_results.len() {
        return Err(VerificationError::ResultLengthMismatch {
            prover: prover_results.len(),
            verifier: verifier_results.len(),
        });
    }
    if prover_bases.len() != prover_results.len() || verifier_bases.len() != prover_results.len() {
        return Err(VerificationError::BasisLengthMismatch {
            results: prover_results.len(),
            bases: prover_bases.len().min(verifier_bases.len()),
        });
    }

    let mut sums = [[0.0f64; 2]; 2];
    let mut counts = [[0usize; 2]; 2];

    for i in 0..prover_results.len() {
        let (Some(a), Some(b)) = (
            CorrelationTable::index(prover_bases[i]),
            CorrelationTable::index(verifier_bases[i]),
        ) else {
            continue;
        };

        let correlation = if prover_results[i] == verifier_results[i] {
            1.0
        } else {
            -1.0
        };
        sums[a][b] += correlation;
        counts[a][b] += 1;
    }

    let mut values = [[0.0f64; 2]; 2];
    for a in 0..2 {
        for b in 0..2 {
            if counts[a][b] > 0 {
                values[a][b] = sums[a][b] / counts[a][b] as f64;
            }
        }
    }

    // S = E[Z,Z] − E[Z,X] + E[X,Z] + E[X,X]
    let s = values[0][0] - values[0][1] + values[1][0] + values[1][1];

    Ok(ChshOutcome {
        value: s.abs(),
        table: CorrelationTable { values, counts },
    })
}

/// Fraction of indices where both parties measured the same bit
pub fn agreement_ratio(
    prover_results: &[u8],
    verifier_results: &[u8],
) -> VerificationResult<f64> {
    if prover_results.len() != verifier_results.len() {
        return Err(VerificationError::ResultLengthMismatch {
            prover: prover_results.len(),
            verifier: verifier_results.len(),
        });
    }
    if prover_results.is_empty() {
        return Err(VerificationError::EmptyResults);
    }

    let agreements = prover_results
        .iter()
        .zip(verifier_results)
        .filter(|(a, b)| a == b)
        .count();

    Ok(agreements as f64 / prover_results.len() as f64)
}

/// Validates that every result bit is 0 or 1
pub fn validate_binary(results: &[u8]) -> VerificationResult<()> {
    for (index, &value) in results.iter().enumerate() {
        if value > 1 {
            return Err(VerificationError::NonBinaryResult { index, value });
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
