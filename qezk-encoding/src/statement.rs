//! Statement → measurement-basis sequence

use crate::error::{EncodingError, EncodingResult};
use qezk_quantum::MeasurementBasis;
use sha2::{Digest, Sha256};

/// Derives the measurement-basis sequence for a statement
///
/// The statement's SHA-256 digest is read as a stream of 2-bit fields:
/// measurement index `i` takes byte `i % 32` at bit offset `2 * (i % 4)`
/// and maps the field through `{0→Z, 1→X, 2→Y, 3→Z}`.
///
/// The output depends only on `(statement, count)`; identical statements
/// always yield identical bases regardless of witness or seed.
pub fn statement_to_bases(
    statement: &str,
    count: usize,
) -> EncodingResult<Vec<MeasurementBasis>> {
    if count < 1 {
        return Err(EncodingError::InvalidCount(count));
    }

    let mut hasher = Sha256::new();
    hasher.update(statement.as_bytes());
    let digest = hasher.finalize();

    let bases = (0..count)
        .map(|i| {
            let byte = digest[i % digest.len()];
            let shift = 2 * (i % 4);
            match (byte >> shift) & 0b11 {
                1 => MeasurementBasis::X,
                2 => MeasurementBasis::Y,
                // 0, and 3 as fallback
                _ => MeasurementBasis::Z,
            }
        })
        .collect();

    Ok(bases)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_same_statement() {
        let a = statement_to_bases("the claim", 64).unwrap();
        let b = statement_to_bases("the claim", 64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_statements_differ() {
        let a = statement_to_bases("claim one", 64).unwrap();
        let b = statement_to_bases("claim two", 64).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_requested_length() {
        for count in [1, 4, 32, 33, 100] {
            let bases = statement_to_bases("s", count).unwrap();
            assert_eq!(bases.len(), count);
        }
    }

    #[test]
    fn test_prefix_stability() {
        // Extending the count never changes earlier indices
        let short = statement_to_bases("stable", 10).unwrap();
        let long = statement_to_bases("stable", 50).unwrap();
        assert_eq!(&long[..10], &short[..]);
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(matches!(
            statement_to_bases("s", 0),
            Err(EncodingError::InvalidCount(0))
        ));
    }

    #[test]
    fn test_digest_wraps_after_32_bytes() {
        let bases = statement_to_bases("wrap", 256).unwrap();
        // Index i and i+128 read the same byte and bit offset
        // (128 = lcm(32, 4)), so the bases repeat with period 128.
        for i in 0..128 {
            assert_eq!(bases[i], bases[i + 128]);
        }
    }

    #[test]
    fn test_field_mapping_covers_all_bases() {
        // Over a long run of a typical digest, every basis should appear
        let bases = statement_to_bases("coverage", 128).unwrap();
        assert!(bases.contains(&MeasurementBasis::Z));
        assert!(bases.contains(&MeasurementBasis::X));
        assert!(bases.contains(&MeasurementBasis::Y));
    }
}
