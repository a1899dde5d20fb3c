//! Registry of active EPR pairs and party share handles

use qezk_quantum::StateVector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier of one EPR pair within a session
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u64);

impl PairId {
    /// Numeric value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical holder of one qubit of each pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Holds the first qubit of each pair
    Prover,
    /// Holds the second qubit of each pair
    Verifier,
}

/// One party's handle over its half of the EPR pairs
///
/// A share carries no state of its own, only the ordered pair IDs the
/// holder may measure. The actual amplitudes stay in the registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Share {
    role: Role,
    pair_ids: Vec<PairId>,
}

impl Share {
    /// Which party this share belongs to
    pub fn role(&self) -> Role {
        self.role
    }

    /// Pair IDs in measurement order
    pub fn pair_ids(&self) -> &[PairId] {
        &self.pair_ids
    }

    /// Number of pairs in the share
    pub fn len(&self) -> usize {
        self.pair_ids.len()
    }

    /// True when the share holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pair_ids.is_empty()
    }
}

/// Single owner of all EPR states for one protocol session
///
/// Pairs are created in `setup()`, consumed within one `prove()` call,
/// and never reused across sessions.
#[derive(Debug, Clone, Default)]
pub struct PairRegistry {
    pairs: HashMap<PairId, StateVector>,
    order: Vec<PairId>,
    next_id: u64,
}

impl PairRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new pair state, returning its ID
    pub fn insert(&mut self, state: StateVector) -> PairId {
        let pair_id = PairId(self.next_id);
        self.next_id += 1;
        self.pairs.insert(pair_id, state);
        self.order.push(pair_id);
        pair_id
    }

    /// State of a registered pair
    pub fn state(&self, pair_id: PairId) -> Option<&StateVector> {
        self.pairs.get(&pair_id)
    }

    /// Whether a pair is registered
    pub fn has_pair(&self, pair_id: PairId) -> bool {
        self.pairs.contains_key(&pair_id)
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs are registered
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Splits the registry into the two party shares
    ///
    /// Both shares list the same pair IDs in insertion order; the prover
    /// logically holds the first qubit of each pair and the verifier the
    /// second. Physical separation is deliberately not modeled.
    pub fn split(&self) -> (Share, Share) {
        let prover = Share {
            role: Role::Prover,
            pair_ids: self.order.clone(),
        };
        let verifier = Share {
            role: Role::Verifier,
            pair_ids: self.order.clone(),
        };
        (prover, verifier)
    }
}

// =============================================================================
// Tests
// =============================================================================
