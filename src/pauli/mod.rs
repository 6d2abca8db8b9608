//! # Pauli strings and sparse Pauli sums
//!
//! Qubit `q` of a [`PauliString`] is entry `q` of its little-endian storage
//! and bit `q` of a dense basis index. Labels are printed big-endian, so the
//! rightmost character acts on qubit 0 (`"ZI"` is `Z` on qubit 1).

pub mod decompose;
pub mod sparse;

use crate::error::{MappingError, Result};
use num_complex::Complex64;
use std::fmt;

pub use self::sparse::SparsePauliOp;

/// Coefficients with magnitude at or below this are treated as zero.
pub const ATOL: f64 = 1e-12;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

/// `i^k` for a phase exponent taken mod 4.
pub(crate) fn i_pow(k: u8) -> Complex64 {
    match k % 4 {
        0 => Complex64::new(1.0, 0.0),
        1 => Complex64::new(0.0, 1.0),
        2 => Complex64::new(-1.0, 0.0),
        3 => Complex64::new(0.0, -1.0),
        _ => unreachable!("'k % 4' has only four possible values"),
    }
}

impl Pauli {
    pub fn to_char(&self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Matrix product `self · other` as `(k, P)` with `self · other = i^k P`.
    pub fn dot(&self, other: &Pauli) -> (u8, Pauli) {
        use Pauli::*;
        match (*self, *other) {
            (I, p) | (p, I) => (0, p),
            (X, X) | (Y, Y) | (Z, Z) => (0, I),
            (X, Y) => (1, Z),
            (Y, X) => (3, Z),
            (Y, Z) => (1, X),
            (Z, Y) => (3, X),
            (Z, X) => (1, Y),
            (X, Z) => (3, Y),
        }
    }

    pub fn flips_bit(&self) -> bool {
        matches!(self, Pauli::X | Pauli::Y)
    }

    /// Matrix element `<row|P|col>` for single bits.
    fn element(&self, row: bool, col: bool) -> Complex64 {
        match (self, row, col) {
            (Pauli::I, r, c) | (Pauli::Z, r, c) if r != c => Complex64::new(0.0, 0.0),
            (Pauli::X, r, c) | (Pauli::Y, r, c) if r == c => Complex64::new(0.0, 0.0),
            (Pauli::I, _, _) | (Pauli::X, _, _) => Complex64::new(1.0, 0.0),
            (Pauli::Z, r, _) => Complex64::new(if r { -1.0 } else { 1.0 }, 0.0),
            (Pauli::Y, r, _) => Complex64::new(0.0, if r { 1.0 } else { -1.0 }),
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = MappingError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            'I' => Ok(Pauli::I),
            'X' => Ok(Pauli::X),
            'Y' => Ok(Pauli::Y),
            'Z' => Ok(Pauli::Z),
            other => Err(MappingError::InvalidLabel(other.to_string())),
        }
    }
}

/// Tensor product of single-qubit Paulis, stored little-endian.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PauliString(Vec<Pauli>);

impl PauliString {
    pub fn new(paulis: Vec<Pauli>) -> Self {
        PauliString(paulis)
    }

    pub fn identity(num_qubits: usize) -> Self {
        PauliString(vec![Pauli::I; num_qubits])
    }

    /// Parses a big-endian label such as `"XIZ"` (`Z` on qubit 0).
    pub fn from_label(label: &str) -> Result<Self> {
        label
            .chars()
            .rev()
            .map(Pauli::try_from)
            .collect::<Result<Vec<_>>>()
            .map(PauliString)
            .map_err(|_| MappingError::InvalidLabel(label.to_string()))
    }

    pub fn num_qubits(&self) -> usize {
        self.0.len()
    }

    pub fn paulis(&self) -> &[Pauli] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().all(|p| *p == Pauli::I)
    }

    /// Qubit-wise product; `self · other = i^k` times the returned string.
    pub fn dot(&self, other: &PauliString) -> (u8, PauliString) {
        let mut phase = 0u8;
        let paulis = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let (k, p) = a.dot(b);
                phase = (phase + k) % 4;
                p
            })
            .collect();
        (phase, PauliString(paulis))
    }

    /// `self ⊗ lower`, with `lower` occupying the low qubits.
    pub fn tensor(&self, lower: &PauliString) -> PauliString {
        let mut paulis = Vec::with_capacity(self.0.len() + lower.0.len());
        paulis.extend_from_slice(&lower.0);
        paulis.extend_from_slice(&self.0);
        PauliString(paulis)
    }

    /// Column of the single non-zero entry in `row`, and its value.
    pub(crate) fn row_entry(&self, row: usize) -> (usize, Complex64) {
        let mut col = row;
        let mut value = Complex64::new(1.0, 0.0);
        for (q, p) in self.0.iter().enumerate() {
            if p.flips_bit() {
                col ^= 1 << q;
            }
            value *= p.element(row >> q & 1 == 1, col >> q & 1 == 1);
        }
        (col, value)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.0.iter().rev() {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}
