use crate::error::{MappingError, Result};
use ndarray::{s, Array2, ArrayView2};
use num_complex::Complex64;

/// Embeds a `d x d` matrix into the `2^num_qubits` square.
///
/// With `embed_upper` the matrix occupies the top-left block and
/// `padding * I` the bottom-right block; otherwise the blocks are swapped.
/// Off-diagonal blocks are zero. A matrix that already has side `2^num_qubits`
/// is returned unchanged.
///
/// ## Errors
/// `InvalidDimension` if the matrix is not square or is larger than the target.
pub fn embed_matrix(
    matrix: &ArrayView2<Complex64>,
    num_qubits: usize,
    padding: f64,
    embed_upper: bool,
) -> Result<Array2<Complex64>> {
    let (rows, cols) = matrix.dim();
    let invalid = MappingError::InvalidDimension {
        rows,
        cols,
        num_qubits,
    };
    let full = u32::try_from(num_qubits)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .ok_or_else(|| invalid.clone())?;
    if rows != cols || rows > full {
        return Err(invalid);
    }

    let diff = full - rows;
    if diff == 0 {
        return Ok(matrix.to_owned());
    }

    let mut out = Array2::zeros((full, full));
    let pad = Complex64::new(padding, 0.0);
    let (sub_range, pad_start) = if embed_upper { (0..rows, rows) } else { (diff..full, 0) };
    out.slice_mut(s![sub_range.clone(), sub_range]).assign(matrix);
    for k in pad_start..pad_start + diff {
        out[[k, k]] = pad;
    }
    Ok(out)
}
