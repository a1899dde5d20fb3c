//! Backend capability seam
//!
//! The core runs against the in-process simulation, but alternate
//! providers (hardware bridges, remote simulators) plug in behind this
//! trait without touching protocol logic. Backends are selected at
//! construction time and used through dynamic dispatch.

use qezk_measurement::measure;
use qezk_quantum::{BellState, Gate, MeasurementBasis, Qubit, StateVector};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Capability interface over a 2-qubit state holder
pub trait QuantumBackend: Send {
    /// Prepares the given Bell state as the current state
    fn create_bell_state(&mut self, kind: BellState);

    /// Applies a library gate to one qubit of the current state
    fn apply_gate(&mut self, gate: Gate, qubit: Qubit);

    /// Measures the first qubit of the current state
    fn measure(&mut self, basis: MeasurementBasis) -> u8;

    /// Current state, when the backend can expose it
    fn state(&self) -> &StateVector;

    /// Resets the current state to |00⟩
    fn reset(&mut self);
}

/// Default backend: pure in-process simulation
#[derive(Debug)]
pub struct SimulationBackend {
    state: StateVector,
    rng: StdRng,
}

impl SimulationBackend {
    /// Creates a backend starting at |00⟩
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: StateVector::zero(),
            rng,
        }
    }
}

impl QuantumBackend for SimulationBackend {
    fn create_bell_state(&mut self, kind: BellState) {
        self.state = kind.state_vector();
    }

    fn apply_gate(&mut self, gate: Gate, qubit: Qubit) {
        self.state = self.state.apply_single(&gate.matrix(), qubit);
    }

    fn measure(&mut self, basis: MeasurementBasis) -> u8 {
        measure(&self.state, basis, &mut self.rng)
    }

    fn state(&self) -> &StateVector {
        &self.state
    }

    fn reset(&mut self) {
        self.state = StateVector::zero();
    }
}

// =============================================================================
// Tests
// =============================================================================
