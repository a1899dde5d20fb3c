//! Protocol configuration

use crate::error::ConfigError;
use qezk_quantum::BellState;
use serde::{Deserialize, Serialize};

/// Default number of EPR pairs per proof
pub const DEFAULT_NUM_PAIRS: usize = 1000;

/// Default CHSH acceptance threshold
///
/// Sits between the classical bound (2.0) and the quantum bound
/// (2√2 ≈ 2.828).
pub const DEFAULT_CHSH_THRESHOLD: f64 = 2.2;

/// Default upper bound on pairs per session
pub const DEFAULT_MAX_PAIRS: usize = 100_000;

/// Minimum raw bit-agreement ratio required by `verify`
pub const AGREEMENT_THRESHOLD: f64 = 0.7;

/// Configuration of a QE-ZK protocol instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// EPR pairs generated per proof session
    pub num_pairs: usize,
    /// CHSH value above which the session counts as entangled
    pub chsh_threshold: f64,
    /// Hard cap on pairs per session
    pub max_pairs: usize,
    /// Bell state the entanglement source produces
    pub bell_state: BellState,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            num_pairs: DEFAULT_NUM_PAIRS,
            chsh_threshold: DEFAULT_CHSH_THRESHOLD,
            max_pairs: DEFAULT_MAX_PAIRS,
            bell_state: BellState::PhiPlus,
        }
    }
}

impl ProtocolConfig {
    /// Validates constructor parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_pairs < 1 {
            return Err(ConfigError::NoPairs);
        }
        if self.num_pairs > self.max_pairs {
            return Err(ConfigError::TooManyPairs {
                requested: self.num_pairs,
                max: self.max_pairs,
            });
        }
        if !(0.0..=3.0).contains(&self.chsh_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.chsh_threshold));
        }
        Ok(())
    }
}
