use thiserror::Error;

/// Errors raised while building an encoding or mapping a spin operator.
///
/// Every error is detected eagerly and returned without partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("spin must be a non-negative half-integer, got {0}")]
    InvalidSpin(String),
    #[error("a {rows}x{cols} matrix does not fit into the space spanned by {num_qubits} qubits")]
    InvalidDimension {
        rows: usize,
        cols: usize,
        num_qubits: usize,
    },
    #[error("unknown spin axis {0:?}, expected one of X, Y, Z")]
    UnknownAxis(String),
    #[error("site index {index} is outside a register of length {register_length}")]
    IndexOutOfRange { index: usize, register_length: usize },
    #[error("malformed spin label {0:?}")]
    InvalidLabel(String),
    #[error("operators act on different numbers of qubits ({left} and {right})")]
    QubitMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, MappingError>;
