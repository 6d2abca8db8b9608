//! # Spin quantum numbers and spin operators
//!
//! A spin `S` is a non-negative half-integer stored as an exact rational.
//! It fixes the single-site dimension `d = 2S+1` and, for the logarithmic
//! encoding, the per-site qubit count `ceil(log2(d))`.

pub mod matrices;
pub mod op;

use crate::error::{MappingError, Result};
use num_rational::Rational64;
use num_traits::Signed;
use std::fmt;
use std::str::FromStr;

pub use self::matrices::{spin_identity, spin_matrix};
pub use self::op::{SpinOp, SpinTerm};

/// Non-negative half-integer spin quantum number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Spin(Rational64);

impl Spin {
    /// `numer / denom`, e.g. `Spin::new(3, 2)` for spin-3/2.
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(MappingError::InvalidSpin(format!("{}/{}", numer, denom)));
        }
        Self::try_from(Rational64::new(numer, denom))
    }

    pub fn from_integer(spin: u32) -> Self {
        Spin(Rational64::from_integer(spin as i64))
    }

    pub fn half() -> Self {
        Spin(Rational64::new(1, 2))
    }

    pub fn value(&self) -> Rational64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }

    /// `2S`, always an integer.
    pub fn twice(&self) -> usize {
        (*self.0.numer() * (2 / *self.0.denom())) as usize
    }

    /// Single-site state-space dimension `2S+1`.
    pub fn dim(&self) -> usize {
        self.twice() + 1
    }

    /// Minimal number of qubits covering `2S+1` states, `ceil(log2(2S+1))`.
    pub fn num_qubits(&self) -> usize {
        self.dim().next_power_of_two().trailing_zeros() as usize
    }
}

impl TryFrom<Rational64> for Spin {
    type Error = MappingError;

    fn try_from(value: Rational64) -> Result<Self> {
        let invalid = || MappingError::InvalidSpin(value.to_string());
        // `Ratio::new` reduces, so half-integers have denominator 1 or 2
        let denom = *value.denom();
        if value.is_negative() || (denom != 1 && denom != 2) {
            return Err(invalid());
        }
        // 2S and the padded dimension of 2S+1 must be representable
        value
            .numer()
            .checked_mul(2 / denom)
            .and_then(|twice| usize::try_from(twice).ok())
            .and_then(|twice| twice.checked_add(1))
            .and_then(usize::checked_next_power_of_two)
            .ok_or_else(invalid)?;
        Ok(Spin(value))
    }
}

impl TryFrom<f64> for Spin {
    type Error = MappingError;

    fn try_from(value: f64) -> Result<Self> {
        let twice = 2.0 * value;
        if !value.is_finite()
            || value < 0.0
            || twice >= i64::MAX as f64
            || (twice - twice.round()).abs() > 1e-9
        {
            return Err(MappingError::InvalidSpin(value.to_string()));
        }
        Spin::try_from(Rational64::new(twice.round() as i64, 2))
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spin axis of a single-site factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpinAxis {
    X,
    Y,
    Z,
}

impl SpinAxis {
    pub const ALL: [SpinAxis; 3] = [SpinAxis::X, SpinAxis::Y, SpinAxis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            SpinAxis::X => "X",
            SpinAxis::Y => "Y",
            SpinAxis::Z => "Z",
        }
    }
}

impl TryFrom<char> for SpinAxis {
    type Error = MappingError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            'X' => Ok(SpinAxis::X),
            'Y' => Ok(SpinAxis::Y),
            'Z' => Ok(SpinAxis::Z),
            _ => Err(MappingError::UnknownAxis(value.to_string())),
        }
    }
}

impl FromStr for SpinAxis {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => SpinAxis::try_from(c),
            _ => Err(MappingError::UnknownAxis(s.to_string())),
        }
    }
}

impl fmt::Display for SpinAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
