// src/error.rs
// Failure modes of the algebra tower. Everything is total except inversion
// of a zero divisor, plus a few construction-time checks.

use itertools::Itertools;
use thiserror::Error;

use crate::algebra::Algebra;

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Inverse requested for an element whose quadrance is singular.
    #[error("zero divisor has no inverse: {0}")]
    ZeroDivisor(String),

    #[error("zero denominator in rational {numer}/0")]
    ZeroDenominator { numer: i64 },

    #[error("expected {expected} coordinates, got {actual}")]
    CoordinateCount { expected: usize, actual: usize },

    #[error("invalid sampler parameters: {0}")]
    Sampler(String),
}

impl AlgebraError {
    pub fn zero_divisor<A: Algebra>(x: &A) -> Self {
        AlgebraError::ZeroDivisor(format!("[{}]", x.coords().iter().join(", ")))
    }
}
