//! Dense matrix → sparse Pauli sum.
//!
//! Splitting a `2^n x 2^n` matrix into blocks over its most significant qubit,
//!
//! ```text
//! | A  B |
//! | C  D |  =  I⊗(A+D)/2 + X⊗(B+C)/2 + Y⊗i(B-C)/2 + Z⊗(A-D)/2
//! ```
//!
//! and recursing into each half-size block yields every Pauli coefficient in
//! `O(n 4^n)`. Blocks that are entirely below [`ATOL`] are pruned, so sparse
//! inputs (such as embedded spin matrices) stay cheap.

use super::{Pauli, PauliString, SparsePauliOp, ATOL};
use crate::error::{MappingError, Result};
use ndarray::{s, Array2, ArrayView2};
use num_complex::Complex64;

impl SparsePauliOp {
    /// Decomposes a square power-of-two matrix into Pauli strings.
    ///
    /// Coefficients with magnitude at most [`ATOL`] are dropped. A `1x1`
    /// matrix is a zero-qubit operator.
    pub fn from_matrix(matrix: &ArrayView2<Complex64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        let num_qubits = rows.trailing_zeros() as usize;
        if rows == 0 || rows != cols || !rows.is_power_of_two() {
            return Err(MappingError::InvalidDimension {
                rows,
                cols,
                num_qubits,
            });
        }

        let mut out = SparsePauliOp::zero(num_qubits);
        let mut prefix = Vec::with_capacity(num_qubits);
        decompose_block(matrix.to_owned(), &mut prefix, &mut out);
        Ok(out)
    }
}

/// `prefix` holds the Paulis already fixed for the higher qubits, top qubit first.
fn decompose_block(block: Array2<Complex64>, prefix: &mut Vec<Pauli>, out: &mut SparsePauliOp) {
    if block.iter().all(|v| v.norm() <= ATOL) {
        return;
    }

    let side = block.nrows();
    if side == 1 {
        let paulis = prefix.iter().rev().copied().collect();
        out.push(PauliString::new(paulis), block[[0, 0]]);
        return;
    }

    let h = side / 2;
    let a = block.slice(s![..h, ..h]);
    let b = block.slice(s![..h, h..]);
    let c = block.slice(s![h.., ..h]);
    let d = block.slice(s![h.., h..]);

    let parts = [
        (Pauli::I, (&a + &d).mapv(|v| v * 0.5)),
        (Pauli::X, (&b + &c).mapv(|v| v * 0.5)),
        (Pauli::Y, (&b - &c).mapv(|v| v * Complex64::new(0.0, 0.5))),
        (Pauli::Z, (&a - &d).mapv(|v| v * 0.5)),
    ];
    for (pauli, sub) in parts {
        prefix.push(pauli);
        decompose_block(sub, prefix, out);
        prefix.pop();
    }
}
