//! Multi-trial simulation harness
//!
//! Runs the protocol repeatedly and aggregates CHSH statistics, the
//! usual way to study how a statement/witness pair behaves across
//! seeds.

use crate::error::ProtocolResult;
use crate::protocol::QezkProtocol;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregated results of a batch of protocol trials
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    /// Number of trials run
    pub trials: usize,
    /// Trials whose proof came back valid
    pub valid_proofs: usize,
    /// valid_proofs / trials
    pub success_rate: f64,
    /// Mean CHSH value across trials
    pub mean_chsh: f64,
    /// Population standard deviation of the CHSH values
    pub std_chsh: f64,
    /// Per-trial CHSH values, in trial order
    pub chsh_values: Vec<f64>,
}

/// Trial runner over one protocol instance
#[derive(Debug, Clone)]
pub struct Simulation {
    protocol: QezkProtocol,
}

impl Simulation {
    /// Wraps a protocol instance for repeated runs
    pub fn new(protocol: QezkProtocol) -> Self {
        Self { protocol }
    }

    /// Runs `trials` independent proofs and aggregates the outcomes
    ///
    /// With a base seed, trial `t` uses `seed + t` (wrapping), so a
    /// whole batch is reproducible; without one every trial draws fresh
    /// entropy.
    pub fn run_trials(
        &self,
        statement: &str,
        witness: &str,
        trials: usize,
        seed: Option<u64>,
    ) -> ProtocolResult<TrialReport> {
        let mut chsh_values = Vec::with_capacity(trials);
        let mut valid_proofs = 0usize;

        for trial in 0..trials {
            let trial_seed = seed.map(|s| s.wrapping_add(trial as u64));
            let proof = self.protocol.prove(statement, witness, trial_seed)?;

            if proof.is_valid {
                valid_proofs += 1;
            }
            chsh_values.push(proof.chsh_value);
        }

        let mean_chsh = if trials > 0 {
            chsh_values.iter().sum::<f64>() / trials as f64
        } else {
            0.0
        };
        let std_chsh = if trials > 0 {
            let variance = chsh_values
                .iter()
                .map(|v| (v - mean_chsh).powi(2))
                .sum::<f64>()
                / trials as f64;
            variance.sqrt()
        } else {
            0.0
        };
        let success_rate = if trials > 0 {
            valid_proofs as f64 / trials as f64
        } else {
            0.0
        };

        debug!(trials, valid_proofs, mean_chsh, "trial batch complete");

        Ok(TrialReport {
            trials,
            valid_proofs,
            success_rate,
            mean_chsh,
            std_chsh,
            chsh_values,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProtocolConfig;

    fn simulation(num_pairs: usize) -> Simulation {
        let protocol = QezkProtocol::new(ProtocolConfig {
            num_pairs,
            ..Default::default()
        })
        .unwrap();
        Simulation::new(protocol)
    }

    #[test]
    fn test_report_shape() {
        let report = simulation(16)
            .run_trials("claim", "1011", 5, Some(100))
            .unwrap();

        assert_eq!(report.trials, 5);
        assert_eq!(report.chsh_values.len(), 5);
        assert!(report.success_rate >= 0.0 && report.success_rate <= 1.0);
        assert!(report.mean_chsh >= 0.0);
        assert!(report.std_chsh >= 0.0);
    }

    #[test]
    fn test_seeded_batches_reproduce() {
        let sim = simulation(16);
        let a = sim.run_trials("claim", "1011", 4, Some(7)).unwrap();
        let b = sim.run_trials("claim", "1011", 4, Some(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_chsh_values_in_range() {
        let report = simulation(32)
            .run_trials("range check", "110", 6, Some(11))
            .unwrap();
        for value in &report.chsh_values {
            assert!((0.0..=3.0).contains(value), "chsh = {value}");
        }
    }

    #[test]
    fn test_seed_near_max_wraps() {
        // Per-trial seeds wrap around u64::MAX instead of panicking
        let report = simulation(8)
            .run_trials("wrap", "101", 3, Some(u64::MAX - 1))
            .unwrap();
        assert_eq!(report.trials, 3);
        assert_eq!(report.chsh_values.len(), 3);
    }

    #[test]
    fn test_zero_trials_is_empty_report() {
        let report = simulation(8).run_trials("s", "1", 0, Some(1)).unwrap();
        assert_eq!(report.trials, 0);
        assert_eq!(report.mean_chsh, 0.0);
        assert_eq!(report.success_rate, 0.0);
    }
}
