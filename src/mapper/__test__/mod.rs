use crate::config::{MapperConfig, SpinNormalization};
use crate::encoding::embed_matrix;
use crate::spin::{spin_identity, spin_matrix, Spin, SpinAxis};
use ndarray::Array2;
use num_complex::Complex64;

pub mod property_test;
pub mod scenario_test;

pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

pub fn pauli_config() -> MapperConfig {
    MapperConfig::default().with_normalization(SpinNormalization::Pauli)
}

/// `a ⊗ b` with `b` on the low bits of the basis index.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    Array2::from_shape_fn((ar * br, ac * bc), |(i, j)| a[[i / br, j / bc]] * b[[i % br, j % bc]])
}

/// Embedded dense single-site matrix, `None` for the identity.
pub fn embedded(spin: Spin, axis: Option<SpinAxis>, config: &MapperConfig) -> Array2<Complex64> {
    let raw = match axis {
        Some(axis) => spin_matrix(spin, axis).mapv(|v| v * config.normalization.factor()),
        None => spin_identity(spin),
    };
    embed_matrix(&raw.view(), spin.num_qubits(), config.padding, config.embed_upper).unwrap()
}
