//! # 🧿 qezk-protocol — QE-ZK Protocol Orchestration
//!
//! Composes the entanglement source, witness encoder and Bell
//! measurement into the four-phase proof protocol.
//!
//! ## Phases
//!
//! ```text
//! ┌─────────┐    ┌─────────────┐    ┌───────────────┐    ┌──────────┐
//! │  Setup  │ ─▶ │ ProverPhase │ ─▶ │ VerifierPhase │ ─▶ │ Verified │
//! └─────────┘    └─────────────┘    └───────────────┘    └──────────┘
//!  EPR pairs      witness → gates    same bases,          CHSH test +
//!  generated      statement → bases  no gates             agreement
//!  and split      apply + measure
//! ```
//!
//! No backward transitions; every `prove()` call runs an independent
//! session with its own seeded generator, so calls may run in parallel
//! without locking.
//!
//! ## Example
//!
//! ```ignore
//! use qezk_protocol::{ProtocolConfig, QezkProtocol};
//!
//! let protocol = QezkProtocol::new(ProtocolConfig::default())?;
//! let proof = protocol.prove("the claim", "101101", Some(42))?;
//! println!("CHSH = {}, valid = {}", proof.chsh_value, proof.is_valid);
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod proof;
pub mod protocol;
pub mod session;
pub mod simulation;

pub use backend::{QuantumBackend, SimulationBackend};
pub use config::ProtocolConfig;
pub use error::{ConfigError, ProtocolError, ProtocolResult};
pub use proof::{Proof, Verdict};
pub use protocol::QezkProtocol;
pub use session::{Phase, Session};
pub use simulation::{Simulation, TrialReport};
