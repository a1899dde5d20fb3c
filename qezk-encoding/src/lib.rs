//! # 🔑 qezk-encoding — Witness and Basis Encoding
//!
//! Deterministically maps the classical inputs of the protocol onto
//! quantum operations:
//!
//! - a secret **witness** bitstring becomes a gate sequence
//!   (3 bits per gate, modulo the 7-gate library);
//! - a public **statement** becomes a measurement-basis sequence
//!   (2-bit fields of its SHA-256 digest).
//!
//! Both encodings are pure: the basis sequence depends only on
//! `(statement, count)`, never on witness or seed.

pub mod error;
pub mod statement;
pub mod witness;

pub use error::{EncodingError, EncodingResult};
pub use statement::statement_to_bases;
pub use witness::{apply_circuit, witness_to_gates};
