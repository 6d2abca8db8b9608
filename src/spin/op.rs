//! Spin operators as ordered sums of products of single-site factors.

use super::{Spin, SpinAxis};
use crate::error::{MappingError, Result};
use num_complex::Complex64;

/// One additive term: an ordered product of `(axis, site)` factors times a coefficient.
///
/// The factor order matters: two factors on the same site are composed as a
/// matrix product in the order they appear.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinTerm {
    pub factors: Vec<(SpinAxis, usize)>,
    pub coeff: Complex64,
}

impl SpinTerm {
    pub fn new(factors: Vec<(SpinAxis, usize)>, coeff: Complex64) -> Self {
        Self { factors, coeff }
    }

    pub fn max_index(&self) -> Option<usize> {
        self.factors.iter().map(|&(_, idx)| idx).max()
    }
}

/// A spin operator on a register of spin-`S` sites.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOp {
    spin: Spin,
    register_length: Option<usize>,
    terms: Vec<SpinTerm>,
}

impl SpinOp {
    pub fn new(spin: Spin, terms: Vec<SpinTerm>) -> Self {
        Self {
            spin,
            register_length: None,
            terms,
        }
    }

    /// Fixes the register length instead of inferring it from the largest site index.
    pub fn with_register_length(mut self, register_length: usize) -> Self {
        self.register_length = Some(register_length);
        self
    }

    /// Builds an operator from labels such as `"X_0 Z_1"`, `"Z_0^2"` or `"+_0 -_1"`.
    ///
    /// `+` and `-` expand into `X + iY` and `X - iY`, splitting the term into
    /// the products of the expansion. An empty label is the identity term.
    pub fn from_labels<'a, I>(spin: Spin, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Complex64)>,
    {
        let mut terms = Vec::new();
        for (label, coeff) in labels {
            terms.extend(parse_label(label, coeff)?);
        }
        Ok(Self::new(spin, terms))
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// Explicit register length, else one past the largest site index used.
    pub fn register_length(&self) -> usize {
        self.register_length.unwrap_or_else(|| {
            self.terms
                .iter()
                .filter_map(SpinTerm::max_index)
                .max()
                .map_or(0, |idx| idx + 1)
        })
    }

    pub fn terms(&self) -> impl Iterator<Item = &SpinTerm> + '_ {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Stable-sorts each term's factors by site index.
    ///
    /// Factors on different sites commute, and the relative order of factors
    /// on one site is kept, so the represented operator does not change.
    pub fn index_order(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|term| {
                let mut factors = term.factors.clone();
                factors.sort_by_key(|&(_, idx)| idx);
                SpinTerm::new(factors, term.coeff)
            })
            .collect();
        Self {
            spin: self.spin,
            register_length: self.register_length,
            terms,
        }
    }
}

#[derive(Clone, Copy)]
enum LabelAxis {
    Axis(SpinAxis),
    Raise,
    Lower,
}

fn parse_token(token: &str) -> Result<(LabelAxis, usize, usize)> {
    let invalid = || MappingError::InvalidLabel(token.to_string());
    let (axis, rest) = token.split_once('_').ok_or_else(invalid)?;
    let axis = match axis {
        "+" => LabelAxis::Raise,
        "-" => LabelAxis::Lower,
        other => LabelAxis::Axis(other.parse()?),
    };
    let (index, power) = match rest.split_once('^') {
        Some((index, power)) => (index, power.parse().map_err(|_| invalid())?),
        None => (rest, 1),
    };
    let index = index.parse().map_err(|_| invalid())?;
    Ok((axis, index, power))
}

fn parse_label(label: &str, coeff: Complex64) -> Result<Vec<SpinTerm>> {
    let mut expanded = vec![SpinTerm::new(Vec::new(), coeff)];
    for token in label.split_whitespace() {
        let (axis, index, power) = parse_token(token)?;
        for _ in 0..power {
            expanded = match axis {
                LabelAxis::Axis(axis) => expanded
                    .into_iter()
                    .map(|mut term| {
                        term.factors.push((axis, index));
                        term
                    })
                    .collect(),
                LabelAxis::Raise | LabelAxis::Lower => {
                    let phase = match axis {
                        LabelAxis::Raise => Complex64::i(),
                        _ => -Complex64::i(),
                    };
                    expanded
                        .into_iter()
                        .flat_map(|term| {
                            let mut x = term.clone();
                            x.factors.push((SpinAxis::X, index));
                            let mut y = term;
                            y.factors.push((SpinAxis::Y, index));
                            y.coeff *= phase;
                            [x, y]
                        })
                        .collect()
                }
            };
        }
    }
    Ok(expanded)
}
