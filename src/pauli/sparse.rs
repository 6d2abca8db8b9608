use super::{i_pow, PauliString};
use crate::error::{MappingError, Result};
use ndarray::Array2;
use num_complex::Complex64;
use num_traits::Zero;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Mul, Neg};

/// Weighted sum of Pauli strings over a fixed number of qubits.
///
/// Terms keep insertion order; identical strings are only merged by
/// [`SparsePauliOp::simplify`].
#[derive(Debug, Clone, PartialEq)]
pub struct SparsePauliOp {
    num_qubits: usize,
    paulis: Vec<PauliString>,
    coeffs: Vec<Complex64>,
}

impl SparsePauliOp {
    /// The additive identity: no terms at all.
    pub fn zero(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            paulis: Vec::new(),
            coeffs: Vec::new(),
        }
    }

    pub fn identity(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            paulis: vec![PauliString::identity(num_qubits)],
            coeffs: vec![Complex64::new(1.0, 0.0)],
        }
    }

    pub fn new(num_qubits: usize, terms: Vec<(PauliString, Complex64)>) -> Result<Self> {
        let mut op = Self::zero(num_qubits);
        for (pauli, coeff) in terms {
            if pauli.num_qubits() != num_qubits {
                return Err(MappingError::QubitMismatch {
                    left: num_qubits,
                    right: pauli.num_qubits(),
                });
            }
            op.push(pauli, coeff);
        }
        Ok(op)
    }

    /// Builds an operator from big-endian labels, e.g. `[("XI", c0), ("IZ", c1)]`.
    pub fn from_list<'a, I>(num_qubits: usize, list: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Complex64)>,
    {
        let terms = list
            .into_iter()
            .map(|(label, coeff)| Ok((PauliString::from_label(label)?, coeff)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(num_qubits, terms)
    }

    pub fn to_list(&self) -> Vec<(String, Complex64)> {
        self.iter().map(|(p, c)| (p.to_string(), c)).collect()
    }

    pub(crate) fn push(&mut self, pauli: PauliString, coeff: Complex64) {
        debug_assert_eq!(pauli.num_qubits(), self.num_qubits);
        self.paulis.push(pauli);
        self.coeffs.push(coeff);
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn paulis(&self) -> &[PauliString] {
        &self.paulis
    }

    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PauliString, Complex64)> + '_ {
        self.paulis.iter().zip(self.coeffs.iter().copied())
    }

    fn check_width(&self, other: &SparsePauliOp) -> Result<()> {
        if self.num_qubits != other.num_qubits {
            return Err(MappingError::QubitMismatch {
                left: self.num_qubits,
                right: other.num_qubits,
            });
        }
        Ok(())
    }

    /// Appends the terms of `other` in place.
    pub fn extend(&mut self, other: &SparsePauliOp) -> Result<()> {
        self.check_width(other)?;
        self.paulis.extend_from_slice(&other.paulis);
        self.coeffs.extend_from_slice(&other.coeffs);
        Ok(())
    }

    /// Concatenates the terms of both operators.
    pub fn add(&self, other: &SparsePauliOp) -> Result<Self> {
        let mut out = self.clone();
        out.extend(other)?;
        Ok(out)
    }

    pub fn sub(&self, other: &SparsePauliOp) -> Result<Self> {
        self.add(&-other.clone())
    }

    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            num_qubits: self.num_qubits,
            paulis: self.paulis.clone(),
            coeffs: self.coeffs.iter().map(|c| c * factor).collect(),
        }
    }

    /// Matrix product `self · other` (`self @ other`), unsimplified.
    pub fn dot(&self, other: &SparsePauliOp) -> Result<Self> {
        self.check_width(other)?;
        let mut out = Self::zero(self.num_qubits);
        for (a, ca) in self.iter() {
            for (b, cb) in other.iter() {
                let (phase, p) = a.dot(b);
                out.push(p, ca * cb * i_pow(phase));
            }
        }
        Ok(out)
    }

    /// `self ⊗ lower`; `lower` acts on the low `lower.num_qubits()` qubits.
    pub fn tensor(&self, lower: &SparsePauliOp) -> Self {
        let mut out = Self::zero(self.num_qubits + lower.num_qubits);
        for (a, ca) in self.iter() {
            for (b, cb) in lower.iter() {
                out.push(a.tensor(b), ca * cb);
            }
        }
        out
    }

    /// Merges identical strings (first occurrence fixes the position) and
    /// drops terms whose magnitude is at most `atol`.
    pub fn simplify(&self, atol: f64) -> Self {
        let mut index: HashMap<&PauliString, usize> = HashMap::with_capacity(self.len());
        let mut paulis: Vec<PauliString> = Vec::new();
        let mut coeffs: Vec<Complex64> = Vec::new();
        for (pauli, coeff) in self.iter() {
            match index.get(pauli) {
                Some(&i) => coeffs[i] += coeff,
                None => {
                    index.insert(pauli, paulis.len());
                    paulis.push(pauli.clone());
                    coeffs.push(coeff);
                }
            }
        }
        let mut out = Self::zero(self.num_qubits);
        for (pauli, coeff) in paulis.into_iter().zip(coeffs) {
            if coeff.norm() > atol {
                out.push(pauli, coeff);
            }
        }
        out
    }

    /// Zeroes real and imaginary parts with magnitude at most `atol`, then
    /// drops terms that became exactly zero.
    pub fn chop(&self, atol: f64) -> Self {
        let chop = |x: f64| if x.abs() <= atol { 0.0 } else { x };
        let mut out = Self::zero(self.num_qubits);
        for (pauli, coeff) in self.iter() {
            let coeff = Complex64::new(chop(coeff.re), chop(coeff.im));
            if !coeff.is_zero() {
                out.push(pauli.clone(), coeff);
            }
        }
        out
    }

    /// Dense `2^n x 2^n` matrix; bit `q` of a basis index is qubit `q`.
    pub fn to_matrix(&self) -> Array2<Complex64> {
        let side = 1usize << self.num_qubits;
        let mut mat = Array2::zeros((side, side));
        for (pauli, coeff) in self.iter() {
            for row in 0..side {
                let (col, value) = pauli.row_entry(row);
                mat[[row, col]] += coeff * value;
            }
        }
        mat
    }

    /// True when `self - other` simplifies to nothing at tolerance `atol`.
    pub fn approx_eq(&self, other: &SparsePauliOp, atol: f64) -> bool {
        match self.sub(other) {
            Ok(diff) => diff.simplify(atol).is_empty(),
            Err(_) => false,
        }
    }
}

impl Neg for SparsePauliOp {
    type Output = SparsePauliOp;

    fn neg(mut self) -> SparsePauliOp {
        self.coeffs.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl Mul<Complex64> for &SparsePauliOp {
    type Output = SparsePauliOp;

    fn mul(self, rhs: Complex64) -> SparsePauliOp {
        self.scale(rhs)
    }
}

impl Mul<Complex64> for SparsePauliOp {
    type Output = SparsePauliOp;

    fn mul(self, rhs: Complex64) -> SparsePauliOp {
        self.scale(rhs)
    }
}

impl fmt::Display for SparsePauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        for (i, (pauli, coeff)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({}) {}", coeff, pauli)?;
        }
        Ok(())
    }
}

impl Default for SparsePauliOp {
    fn default() -> Self {
        Self::zero(0)
    }
}

#[cfg(test)]
pub(crate) fn assert_matrix_close(actual: &Array2<Complex64>, expected: &Array2<Complex64>) {
    assert_eq!(actual.shape(), expected.shape(), "matrix shapes differ");
    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        assert!(
            (a - e).norm() < 1e-10,
            "entry {:?}: got {}, expected {}",
            idx,
            a,
            e
        );
    }
}
