use super::embed::embed_matrix;
use crate::config::MapperConfig;
use crate::error::Result;
use crate::pauli::{SparsePauliOp, ATOL};
use crate::spin::{spin_identity, spin_matrix, Spin, SpinAxis};
use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

/// The four single-site operators `X̃, Ỹ, Z̃, Ĩ` of the logarithmic encoding.
///
/// Each is the spin matrix embedded into `ceil(log2(2S+1))` qubits and then
/// decomposed into Pauli strings. The value depends only on the spin and the
/// mapper configuration, so it is built once and shared.
#[derive(Debug, Clone, PartialEq)]
pub struct LogarithmicEncoding {
    spin: Spin,
    num_qubits: usize,
    x: SparsePauliOp,
    y: SparsePauliOp,
    z: SparsePauliOp,
    identity: SparsePauliOp,
}

impl LogarithmicEncoding {
    pub fn new(spin: Spin, config: &MapperConfig) -> Result<Self> {
        let num_qubits = spin.num_qubits();
        let scale = config.normalization.factor();

        let encode = |matrix: Array2<Complex64>| -> Result<SparsePauliOp> {
            let embedded =
                embed_matrix(&matrix.view(), num_qubits, config.padding, config.embed_upper)?;
            Ok(SparsePauliOp::from_matrix(&embedded.view())?.chop(ATOL))
        };
        let axis = |axis| encode(spin_matrix(spin, axis).mapv(|v| v * scale));

        let encoding = Self {
            spin,
            num_qubits,
            x: axis(SpinAxis::X)?,
            y: axis(SpinAxis::Y)?,
            z: axis(SpinAxis::Z)?,
            identity: encode(spin_identity(spin))?,
        };
        debug!(
            spin = %spin,
            num_qubits,
            x_terms = encoding.x.len(),
            y_terms = encoding.y.len(),
            z_terms = encoding.z.len(),
            "built logarithmic site encoding"
        );
        Ok(encoding)
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// Qubits per spin site.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn operator(&self, axis: SpinAxis) -> &SparsePauliOp {
        match axis {
            SpinAxis::X => &self.x,
            SpinAxis::Y => &self.y,
            SpinAxis::Z => &self.z,
        }
    }

    pub fn identity(&self) -> &SparsePauliOp {
        &self.identity
    }
}
