//! The four-phase QE-ZK protocol

use crate::config::{AGREEMENT_THRESHOLD, ProtocolConfig};
use crate::error::{ProtocolError, ProtocolResult};
use crate::proof::{Proof, Verdict};
use crate::session::{Phase, Session};
use qezk_encoding::{apply_circuit, statement_to_bases, witness_to_gates};
use qezk_entanglement::{EntanglementError, EntanglementSource, Role, Share};
use qezk_measurement::{
    VerificationError, agreement_ratio, chsh_statistic, measure, validate_binary,
};
use qezk_quantum::MeasurementBasis;
use tracing::debug;

/// Complete QE-ZK protocol instance
///
/// Stateless across proofs: every `prove()` call creates its own
/// [`Session`], so a single instance can serve parallel callers.
#[derive(Debug, Clone)]
pub struct QezkProtocol {
    config: ProtocolConfig,
    source: EntanglementSource,
}

impl QezkProtocol {
    /// Creates a protocol instance, validating the configuration
    pub fn new(config: ProtocolConfig) -> ProtocolResult<Self> {
        config.validate()?;
        let source = EntanglementSource::with_max_pairs(config.max_pairs);
        Ok(Self { config, source })
    }

    /// Active configuration
    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Setup phase: generates and splits the session's EPR pairs
    ///
    /// An explicit seed makes the whole session reproducible.
    pub fn setup(&self, seed: Option<u64>) -> ProtocolResult<(Session, Share, Share)> {
        let registry = self
            .source
            .generate_registry(self.config.num_pairs, self.config.bell_state)?;

        if registry.len() != self.config.num_pairs {
            return Err(EntanglementError::PairCountMismatch {
                requested: self.config.num_pairs,
                generated: registry.len(),
            }
            .into());
        }

        let (prover_share, verifier_share) = registry.split();
        let session = Session::new(registry, seed);

        debug!(
            pairs = self.config.num_pairs,
            bell_state = %self.config.bell_state,
            "session setup complete"
        );

        Ok((session, prover_share, verifier_share))
    }

    /// Prover phase: encode the witness, transform each pair, measure
    ///
    /// Derives the gate sequence from the witness and the basis
    /// sequence from the statement (one basis per pair), applies the
    /// gates to a fresh copy of each pair's state, and measures in the
    /// corresponding basis.
    pub fn prover_phase(
        &self,
        session: &mut Session,
        statement: &str,
        witness: &str,
        share: &Share,
    ) -> ProtocolResult<(Vec<u8>, Vec<MeasurementBasis>)> {
        session.expect_phase(Phase::Setup)?;
        if statement.is_empty() {
            return Err(ProtocolError::EmptyStatement);
        }
        if share.role() != Role::Prover {
            return Err(ProtocolError::WrongShare {
                expected: Role::Prover,
                actual: share.role(),
            });
        }

        let gates = witness_to_gates(witness)?;
        let bases = statement_to_bases(statement, share.len())?;

        let mut results = Vec::with_capacity(share.len());
        for (pair_id, basis) in share.pair_ids().iter().zip(&bases) {
            let state = session
                .registry
                .state(*pair_id)
                .ok_or(EntanglementError::PairNotFound(*pair_id))?;

            let transformed = apply_circuit(*state, &gates);
            results.push(measure(&transformed, *basis, &mut session.rng));
        }

        session.set_phase(Phase::ProverPhase);
        debug!(gates = gates.len(), results = results.len(), "prover phase complete");

        Ok((results, bases))
    }

    /// Verifier phase: measure directly in the prover-supplied bases
    ///
    /// No gates are applied. The supplied bases are checked against the
    /// statement-derived sequence — both parties measuring in the same
    /// basis at each index is a protocol invariant, not an option.
    pub fn verifier_phase(
        &self,
        session: &mut Session,
        statement: &str,
        share: &Share,
        bases: &[MeasurementBasis],
    ) -> ProtocolResult<Vec<u8>> {
        session.expect_phase(Phase::ProverPhase)?;
        if statement.is_empty() {
            return Err(ProtocolError::EmptyStatement);
        }
        if share.role() != Role::Verifier {
            return Err(ProtocolError::WrongShare {
                expected: Role::Verifier,
                actual: share.role(),
            });
        }
        if bases.len() != share.len() {
            return Err(VerificationError::BasisLengthMismatch {
                results: share.len(),
                bases: bases.len(),
            }
            .into());
        }

        let expected = statement_to_bases(statement, share.len())?;
        if let Some(index) = (0..bases.len()).find(|&i| bases[i] != expected[i]) {
            return Err(ProtocolError::BasisMismatch { index });
        }

        let mut results = Vec::with_capacity(share.len());
        for (pair_id, basis) in share.pair_ids().iter().zip(bases) {
            let state = session
                .registry
                .state(*pair_id)
                .ok_or(EntanglementError::PairNotFound(*pair_id))?;

            results.push(measure(state, *basis, &mut session.rng));
        }

        session.set_phase(Phase::VerifierPhase);
        debug!(results = results.len(), "verifier phase complete");

        Ok(results)
    }

    /// Verification: CHSH statistic plus raw agreement check
    ///
    /// `is_valid` requires both the CHSH value above the configured
    /// threshold and a bit-agreement ratio above 0.7.
    pub fn verify(
        &self,
        session: &mut Session,
        prover_results: &[u8],
        verifier_results: &[u8],
        bases: &[MeasurementBasis],
    ) -> ProtocolResult<Verdict> {
        session.expect_phase(Phase::VerifierPhase)?;
        validate_binary(prover_results)?;
        validate_binary(verifier_results)?;

        let outcome = chsh_statistic(prover_results, verifier_results, bases, bases)?;
        if !(0.0..=3.0).contains(&outcome.value) {
            return Err(VerificationError::ChshOutOfRange(outcome.value).into());
        }

        let agreement = agreement_ratio(prover_results, verifier_results)?;

        let is_entangled = outcome.value > self.config.chsh_threshold;
        let agreement_ok = agreement > AGREEMENT_THRESHOLD;

        session.set_phase(Phase::Verified);
        debug!(
            chsh = outcome.value,
            agreement,
            is_entangled,
            "verification complete"
        );

        Ok(Verdict {
            is_valid: is_entangled && agreement_ok,
            chsh_value: outcome.value,
            agreement,
        })
    }

    /// Runs the full protocol and packages the proof record
    ///
    /// Any phase error aborts the whole call; no partial proof is ever
    /// returned.
    pub fn prove(
        &self,
        statement: &str,
        witness: &str,
        seed: Option<u64>,
    ) -> ProtocolResult<Proof> {
        let (mut session, prover_share, verifier_share) = self.setup(seed)?;

        let (prover_results, bases) =
            self.prover_phase(&mut session, statement, witness, &prover_share)?;

        let verifier_results =
            self.verifier_phase(&mut session, statement, &verifier_share, &bases)?;

        let verdict = self.verify(&mut session, &prover_results, &verifier_results, &bases)?;

        Ok(Proof {
            prover_results,
            verifier_results,
            bases,
            chsh_value: verdict.chsh_value,
            is_valid: verdict.is_valid,
            statement: statement.to_string(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qezk_quantum::BellState;

    fn small_protocol(num_pairs: usize) -> QezkProtocol {
        QezkProtocol::new(ProtocolConfig {
            num_pairs,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_constructor_rejects_bad_config() {
        let config = ProtocolConfig {
            chsh_threshold: 5.0,
            ..Default::default()
        };
        assert!(QezkProtocol::new(config).is_err());
    }

    #[test]
    fn test_setup_produces_matching_shares() {
        let protocol = small_protocol(16);
        let (session, prover, verifier) = protocol.setup(Some(1)).unwrap();

        assert_eq!(session.pair_count(), 16);
        assert_eq!(prover.len(), 16);
        assert_eq!(verifier.len(), 16);
    }

    #[test]
    fn test_prover_phase_lengths() {
        let protocol = small_protocol(8);
        let (mut session, prover, _) = protocol.setup(Some(2)).unwrap();

        let (results, bases) = protocol
            .prover_phase(&mut session, "stmt", "101", &prover)
            .unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(bases.len(), 8);
        assert!(results.iter().all(|r| *r <= 1));
    }

    #[test]
    fn test_empty_statement_rejected() {
        let protocol = small_protocol(4);
        let (mut session, prover, _) = protocol.setup(None).unwrap();

        assert!(matches!(
            protocol.prover_phase(&mut session, "", "1", &prover),
            Err(ProtocolError::EmptyStatement)
        ));
    }

    #[test]
    fn test_share_roles_enforced() {
        let protocol = small_protocol(4);
        let (mut session, prover, verifier) = protocol.setup(Some(3)).unwrap();

        // Handing the verifier share to the prover phase is an error
        assert!(matches!(
            protocol.prover_phase(&mut session, "s", "1", &verifier),
            Err(ProtocolError::WrongShare { .. })
        ));

        let (_, bases) = protocol
            .prover_phase(&mut session, "s", "1", &prover)
            .unwrap();
        assert!(matches!(
            protocol.verifier_phase(&mut session, "s", &prover, &bases),
            Err(ProtocolError::WrongShare { .. })
        ));
    }

    #[test]
    fn test_verifier_rejects_tampered_bases() {
        let protocol = small_protocol(4);
        let (mut session, prover, verifier) = protocol.setup(Some(4)).unwrap();
        let (_, mut bases) = protocol
            .prover_phase(&mut session, "claim", "1", &prover)
            .unwrap();

        // Flip one basis away from the statement-derived sequence
        bases[0] = match bases[0] {
            MeasurementBasis::Z => MeasurementBasis::X,
            _ => MeasurementBasis::Z,
        };

        assert!(matches!(
            protocol.verifier_phase(&mut session, "claim", &verifier, &bases),
            Err(ProtocolError::BasisMismatch { index: 0 })
        ));
    }

    #[test]
    fn test_phases_cannot_run_out_of_order() {
        let protocol = small_protocol(4);
        let (mut session, _, verifier) = protocol.setup(Some(5)).unwrap();

        // Verifier phase straight after setup is rejected before any
        // state is touched
        let bases = vec![MeasurementBasis::Z; 4];
        let err = protocol
            .verifier_phase(&mut session, "s", &verifier, &bases)
            .unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::PhaseOrder {
                expected: Phase::ProverPhase,
                actual: Phase::Setup
            }
        ));
        assert_eq!(session.phase(), Phase::Setup);
    }

    #[test]
    fn test_verify_rejects_non_binary_results() {
        let protocol = small_protocol(4);
        let (mut session, prover, verifier) = protocol.setup(Some(6)).unwrap();
        let (results, bases) = protocol
            .prover_phase(&mut session, "s", "1", &prover)
            .unwrap();
        let verifier_results = protocol
            .verifier_phase(&mut session, "s", &verifier, &bases)
            .unwrap();

        let mut tampered = results;
        tampered[0] = 2;
        assert!(matches!(
            protocol.verify(&mut session, &tampered, &verifier_results, &bases),
            Err(ProtocolError::Verification(
                VerificationError::NonBinaryResult { index: 0, value: 2 }
            ))
        ));
    }

    #[test]
    fn test_verify_rejects_mismatched_lengths() {
        let protocol = small_protocol(4);
        let (mut session, prover, verifier) = protocol.setup(Some(7)).unwrap();
        let (results, bases) = protocol
            .prover_phase(&mut session, "s", "1", &prover)
            .unwrap();
        let verifier_results = protocol
            .verifier_phase(&mut session, "s", &verifier, &bases)
            .unwrap();

        let short = &results[..3];
        assert!(protocol
            .verify(&mut session, short, &verifier_results, &bases)
            .is_err());
    }

    #[test]
    fn test_bell_state_kind_is_configurable() {
        let protocol = QezkProtocol::new(ProtocolConfig {
            num_pairs: 2,
            bell_state: BellState::PsiMinus,
            ..Default::default()
        })
        .unwrap();

        let proof = protocol.prove("s", "0", Some(1)).unwrap();
        assert_eq!(proof.prover_results.len(), 2);
    }
}
