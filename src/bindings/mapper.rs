use crate::config::{MapperConfig, SpinNormalization};
use crate::error::MappingError;
use crate::mapper::LogarithmicMapper;
use crate::spin::{Spin, SpinOp};
use num_complex::Complex64;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

impl From<MappingError> for PyErr {
    fn from(value: MappingError) -> PyErr {
        PyValueError::new_err(value.to_string())
    }
}

fn build_op(spin: f64, labels: &[(String, Complex64)]) -> PyResult<SpinOp> {
    let spin = Spin::try_from(spin)?;
    Ok(SpinOp::from_labels(
        spin,
        labels.iter().map(|(label, coeff)| (label.as_str(), *coeff)),
    )?)
}

#[pyclass(name = "LogarithmicMapper")]
pub struct PyLogarithmicMapper {
    inner: LogarithmicMapper,
}

#[pymethods]
impl PyLogarithmicMapper {
    #[new]
    #[pyo3(signature = (*, padding = 1.0, embed_upper = true, pauli_normalization = false))]
    pub fn new(padding: f64, embed_upper: bool, pauli_normalization: bool) -> Self {
        let normalization = if pauli_normalization {
            SpinNormalization::Pauli
        } else {
            SpinNormalization::Physical
        };
        let config = MapperConfig::default()
            .with_padding(padding)
            .with_embed_upper(embed_upper)
            .with_normalization(normalization);
        PyLogarithmicMapper {
            inner: LogarithmicMapper::new(config),
        }
    }

    /// Maps `[(label, coeff), ...]` and returns `[(pauli_label, coeff), ...]`.
    #[pyo3(name = "map", signature = (spin, labels, register_length = None))]
    fn map(
        &self,
        py: Python,
        spin: f64,
        labels: Vec<(String, Complex64)>,
        register_length: Option<usize>,
    ) -> PyResult<Vec<(String, Complex64)>> {
        let op = build_op(spin, &labels)?;
        let mapped = py.allow_threads(|| self.inner.map(&op, register_length))?;
        Ok(mapped.to_list())
    }

    #[pyo3(name = "to_matrix", signature = (spin, labels, register_length = None))]
    fn to_matrix<'py>(
        &self,
        py: Python<'py>,
        spin: f64,
        labels: Vec<(String, Complex64)>,
        register_length: Option<usize>,
    ) -> PyResult<&'py PyArray2<Complex64>> {
        let op = build_op(spin, &labels)?;
        let matrix = py.allow_threads(|| {
            self.inner
                .map(&op, register_length)
                .map(|mapped| mapped.to_matrix())
        })?;
        Ok(matrix.into_pyarray(py))
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyLogarithmicMapper>()?;
    Ok(())
}
