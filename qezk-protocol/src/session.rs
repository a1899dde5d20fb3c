//! Per-proof session state

use crate::error::{ProtocolError, ProtocolResult};
use qezk_entanglement::PairRegistry;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol phase of one session
///
/// Transitions run strictly forward: Setup → ProverPhase →
/// VerifierPhase → Verified. Verified is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// EPR pairs generated and split
    Setup,
    /// Prover has applied its circuit and measured
    ProverPhase,
    /// Verifier has measured in the prover's bases
    VerifierPhase,
    /// CHSH verification done (terminal)
    Verified,
}

impl Phase {
    /// Phase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::ProverPhase => "ProverPhase",
            Self::VerifierPhase => "VerifierPhase",
            Self::Verified => "Verified",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// State of one proof session
///
/// Owns the pair registry and the seeded generator that drives every
/// probabilistic draw of the session. Each `prove()` call builds its
/// own session, so sessions never share mutable state.
#[derive(Debug)]
pub struct Session {
    pub(crate) registry: PairRegistry,
    pub(crate) rng: StdRng,
    phase: Phase,
}

impl Session {
    /// Creates a session in the Setup phase
    ///
    /// An explicit seed reproduces the exact same draw sequence;
    /// without one the generator is seeded from OS entropy.
    pub fn new(registry: PairRegistry, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            registry,
            rng,
            phase: Phase::Setup,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of pairs held by the session
    pub fn pair_count(&self) -> usize {
        self.registry.len()
    }

    /// Rejects the call unless the session is in the expected phase
    pub(crate) fn expect_phase(&self, expected: Phase) -> ProtocolResult<()> {
        if self.phase != expected {
            return Err(ProtocolError::PhaseOrder {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Moves the session forward; callers check the phase first
    pub(crate) fn set_phase(&mut self, next: Phase) {
        self.phase = next;
    }
}
