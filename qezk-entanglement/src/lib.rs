//! # 🔗 qezk-entanglement — EPR Pair Source and Registry
//!
//! Generates simulated EPR pairs (Bell states) and distributes them
//! between the two protocol parties.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         EntanglementSource                      │
//! │  builds N fresh Bell states per session         │
//! └───────────────────────┬─────────────────────────┘
//!                         │
//! ┌───────────────────────▼─────────────────────────┐
//! │         PairRegistry                            │
//! │  single owner of all pair states, keyed by      │
//! │  PairId                                         │
//! └───────────┬─────────────────────────┬───────────┘
//!             │                         │
//!       Share (Prover)           Share (Verifier)
//!       opaque PairId list       opaque PairId list
//! ```
//!
//! Both shares reference the same registry entries. This models — without
//! physical fidelity — that each party holds one qubit of every pair; a
//! future backend with truly separate state holders only has to replace
//! the registry, not the protocol logic.

pub mod error;
pub mod registry;
pub mod source;

pub use error::{EntanglementError, EntanglementResult};
pub use registry::{PairId, PairRegistry, Role, Share};
pub use source::EntanglementSource;
