mod mapper;

pub use mapper::*;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// spin_logmap - logarithmic spin-to-qubit encoding
#[pymodule]
pub fn spin_logmap(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    mapper::register(m)?;
    Ok(())
}
