//! # Logarithmic single-site encoding
//!
//! A spin-`S` site is represented by the lowest `2S+1` states of
//! `ceil(log2(2S+1))` qubits. The spin matrices are embedded into the
//! power-of-two space ([`embed_matrix`]) and decomposed into Pauli strings
//! ([`LogarithmicEncoding`]).

pub mod embed;
pub mod site;

pub use self::embed::embed_matrix;
pub use self::site::LogarithmicEncoding;
