//! # Logarithmic spin-to-qubit mapper
//!
//! Every term of a spin operator becomes a tensor product of per-site
//! encoded operators. Factors that share a site are composed as a matrix
//! product in term order, untouched sites receive `Ĩ`, and site
//! `register_length - 1` is the most significant factor. The scaled terms
//! are summed into one [`SparsePauliOp`] over `register_length * n` qubits.

use crate::config::MapperConfig;
use crate::encoding::LogarithmicEncoding;
use crate::error::{MappingError, Result};
use crate::pauli::{SparsePauliOp, ATOL};
use crate::spin::{Spin, SpinOp, SpinTerm};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub struct LogarithmicMapper {
    config: MapperConfig,
    cache: RwLock<HashMap<Spin, Arc<LogarithmicEncoding>>>,
}

impl LogarithmicMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Site encoding for `spin`, built on first use and shared afterwards.
    pub fn encoding(&self, spin: Spin) -> Result<Arc<LogarithmicEncoding>> {
        if let Some(encoding) = self.cache.read().ok().and_then(|c| c.get(&spin).cloned()) {
            return Ok(encoding);
        }
        let encoding = Arc::new(LogarithmicEncoding::new(spin, &self.config)?);
        match self.cache.write() {
            Ok(mut cache) => Ok(cache.entry(spin).or_insert(encoding).clone()),
            // a poisoned cache only loses memoization
            Err(_) => Ok(encoding),
        }
    }

    /// Maps a spin operator onto qubits.
    ///
    /// `register_length` overrides the operator's own register length. An
    /// operator without terms maps to the zero operator on
    /// `register_length * n` qubits.
    ///
    /// ## Errors
    /// * `IndexOutOfRange` - a factor refers to a site outside the register.
    /// * `InvalidDimension` - propagated from the site encoding.
    pub fn map(&self, op: &SpinOp, register_length: Option<usize>) -> Result<SparsePauliOp> {
        let register_length = register_length.unwrap_or_else(|| op.register_length());
        let encoding = self.encoding(op.spin())?;
        let num_qubits = register_length * encoding.num_qubits();
        debug!(
            spin = %op.spin(),
            terms = op.len(),
            register_length,
            num_qubits,
            "mapping spin operator"
        );

        let ordered = op.index_order();
        let mapped = ordered
            .terms()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|term| map_term(term, register_length, &encoding))
            .collect::<Result<Vec<_>>>()?;

        // left-to-right so the summation order never depends on scheduling
        let mut qubit_op = SparsePauliOp::zero(num_qubits);
        for term in &mapped {
            qubit_op.extend(term)?;
        }
        let qubit_op = qubit_op.simplify(ATOL);
        debug!(pauli_terms = qubit_op.len(), "mapped spin operator");
        Ok(qubit_op)
    }

    pub fn map_many(&self, ops: &[SpinOp]) -> Result<Vec<SparsePauliOp>> {
        ops.iter().map(|op| self.map(op, None)).collect()
    }
}

/// Maps a single term: per-site composition, identity fill, tensor, scale.
pub fn map_term(
    term: &SpinTerm,
    register_length: usize,
    encoding: &LogarithmicEncoding,
) -> Result<SparsePauliOp> {
    let mut sites: Vec<Option<SparsePauliOp>> = vec![None; register_length];
    for &(axis, index) in &term.factors {
        let slot = sites.get_mut(index).ok_or(MappingError::IndexOutOfRange {
            index,
            register_length,
        })?;
        let factor = encoding.operator(axis);
        let composed = match slot.take() {
            Some(acc) => acc.dot(factor)?.simplify(ATOL),
            None => factor.clone(),
        };
        *slot = Some(composed);
    }
    trace!(factors = term.factors.len(), coeff = %term.coeff, "mapping term");

    let mut product: Option<SparsePauliOp> = None;
    for site in sites.iter().rev() {
        let site = site.as_ref().unwrap_or_else(|| encoding.identity());
        product = Some(match product {
            Some(high) => high.tensor(site),
            None => site.clone(),
        });
    }
    let product = product.unwrap_or_else(|| SparsePauliOp::identity(0));
    Ok(product.scale(term.coeff))
}

#[cfg(test)]
mod __test__;
