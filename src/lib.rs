//! # spin_logmap
//!
//! Logarithmic encoding of general spin-`S` operators into qubit operators.
//! Each site uses `ceil(log2(2S+1))` qubits: the spin matrices are embedded
//! into a power-of-two block, decomposed into Pauli strings, and composed
//! term by term into a [`SparsePauliOp`] over the whole register.
//!
//! ```ignore
//! use spin_logmap::{LogarithmicMapper, Spin, SpinOp};
//! use num_complex::Complex64;
//!
//! let op = SpinOp::from_labels(Spin::from_integer(1), [("X_0 X_1", Complex64::new(1.0, 0.0))])?;
//! let qubit_op = LogarithmicMapper::default().map(&op, None)?;
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod mapper;
pub mod pauli;
pub mod spin;

#[cfg(feature = "python")]
mod bindings;

pub use config::{MapperConfig, SpinNormalization};
pub use encoding::{embed_matrix, LogarithmicEncoding};
pub use error::{MappingError, Result};
pub use mapper::LogarithmicMapper;
pub use pauli::{Pauli, PauliString, SparsePauliOp};
pub use spin::{Spin, SpinAxis, SpinOp, SpinTerm};
