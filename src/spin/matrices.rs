//! Dense spin matrices in the `|S, m>` basis.
//!
//! Row/column `k` corresponds to the magnetic quantum number `m = S - k`,
//! so `S_z = diag(S, S-1, ..., -S)`.

use super::{Spin, SpinAxis};
use ndarray::Array2;
use num_complex::Complex64;

/// Raising operator `S+`, non-zero only on the superdiagonal.
fn raising(spin: Spin) -> Array2<Complex64> {
    let dim = spin.dim();
    let s = spin.as_f64();
    let mut mat = Array2::zeros((dim, dim));
    for k in 1..dim {
        let m = s - k as f64;
        mat[[k - 1, k]] = Complex64::new((s * (s + 1.0) - m * (m + 1.0)).sqrt(), 0.0);
    }
    mat
}

/// `S_x`, `S_y` or `S_z` for the given spin as a `(2S+1) x (2S+1)` matrix.
pub fn spin_matrix(spin: Spin, axis: SpinAxis) -> Array2<Complex64> {
    match axis {
        SpinAxis::X => {
            let plus = raising(spin);
            let minus = plus.t().to_owned();
            (plus + minus).mapv(|v| v * 0.5)
        }
        SpinAxis::Y => {
            let plus = raising(spin);
            let minus = plus.t().to_owned();
            // (S+ - S-) / 2i
            (plus - minus).mapv(|v| v * Complex64::new(0.0, -0.5))
        }
        SpinAxis::Z => {
            let dim = spin.dim();
            let s = spin.as_f64();
            Array2::from_diag(&ndarray::Array1::from_iter(
                (0..dim).map(|k| Complex64::new(s - k as f64, 0.0)),
            ))
        }
    }
}

pub fn spin_identity(spin: Spin) -> Array2<Complex64> {
    Array2::eye(spin.dim())
}
