//! EPR pair generation

use crate::error::{EntanglementError, EntanglementResult};
use crate::registry::PairRegistry;
use qezk_quantum::{BellState, StateVector};

/// Default cap on pairs per generation request
pub const DEFAULT_MAX_PAIRS: usize = 100_000;

/// Simulated entanglement source
///
/// Builds each requested Bell state fresh through the gate circuit.
/// Generation itself is deterministic; all probabilistic draws of the
/// protocol happen at measurement time, from the session generator.
#[derive(Debug, Clone)]
pub struct EntanglementSource {
    max_pairs: usize,
}

impl EntanglementSource {
    /// Creates a source with the default pair cap
    pub fn new() -> Self {
        Self::with_max_pairs(DEFAULT_MAX_PAIRS)
    }

    /// Creates a source with a custom pair cap
    pub fn with_max_pairs(max_pairs: usize) -> Self {
        Self { max_pairs }
    }

    /// Upper bound on pairs per request
    pub fn max_pairs(&self) -> usize {
        self.max_pairs
    }

    /// Generates `num_pairs` independent Bell states of the given kind
    pub fn generate_pairs(
        &self,
        num_pairs: usize,
        kind: BellState,
    ) -> EntanglementResult<Vec<StateVector>> {
        if num_pairs < 1 {
            return Err(EntanglementError::NoPairs);
        }
        if num_pairs > self.max_pairs {
            return Err(EntanglementError::TooManyPairs {
                requested: num_pairs,
                max: self.max_pairs,
            });
        }

        let pairs: Vec<StateVector> = (0..num_pairs).map(|_| kind.state_vector()).collect();

        if pairs.len() != num_pairs {
            return Err(EntanglementError::PairCountMismatch {
                requested: num_pairs,
                generated: pairs.len(),
            });
        }

        Ok(pairs)
    }

    /// Generates pairs and registers them, returning the filled registry
    pub fn generate_registry(
        &self,
        num_pairs: usize,
        kind: BellState,
    ) -> EntanglementResult<PairRegistry> {
        let mut registry = PairRegistry::new();
        for state in self.generate_pairs(num_pairs, kind)? {
            registry.insert(state);
        }

        if registry.len() != num_pairs {
            return Err(EntanglementError::PairCountMismatch {
                requested: num_pairs,
                generated: registry.len(),
            });
        }

        Ok(registry)
    }
}

impl Default for EntanglementSource {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
