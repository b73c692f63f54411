// src/algebra.rs
// The operations every level of the tower supports. A level is built from the
// one below by doubling, so each impl only ever calls into its halves.

use std::fmt::Debug;

use tracing::debug;

use crate::error::{AlgebraError, Result};
use crate::rational::{int, Rational};

// ============================================================================
// VECTOR SPACE + PRODUCT
// ============================================================================

/// A finite-dimensional algebra over the rationals with an involution.
pub trait Algebra: Clone + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Number of rational coordinates.
    const DIM: usize;

    fn zero() -> Self;
    fn one() -> Self;
    /// Embeds `r` as `r·1`.
    fn from_rational(r: Rational) -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;
    fn scale(&self, t: &Rational) -> Self;
    fn conj(&self) -> Self;
    fn mul(&self, other: &Self) -> Self;

    /// The coefficient of `1`.
    fn real(&self) -> Rational;

    fn push_coords(&self, out: &mut Vec<Rational>);

    /// Rebuilds an element from exactly `DIM` coordinates. Used by the
    /// doubling impls on pre-split halves; callers holding unchecked input
    /// go through [`Algebra::from_coords`].
    ///
    /// # Panics
    ///
    /// Panics if `coords` is shorter than `DIM`.
    fn from_slice(coords: &[Rational]) -> Self;

    fn coords(&self) -> Vec<Rational> {
        let mut out = Vec::with_capacity(Self::DIM);
        self.push_coords(&mut out);
        out
    }

    fn from_coords(coords: &[Rational]) -> Result<Self> {
        if coords.len() != Self::DIM {
            return Err(AlgebraError::CoordinateCount {
                expected: Self::DIM,
                actual: coords.len(),
            });
        }
        Ok(Self::from_slice(coords))
    }

    fn from_ints(coords: &[i64]) -> Result<Self> {
        let coords: Vec<Rational> = coords.iter().map(|&n| int(n)).collect();
        Self::from_coords(&coords)
    }

    /// The basis element with a single `1` at `index`.
    fn unit(index: usize) -> Option<Self> {
        if index >= Self::DIM {
            return None;
        }
        let mut coords = vec![int(0); Self::DIM];
        coords[index] = int(1);
        Some(Self::from_slice(&coords))
    }
}

// ============================================================================
// QUADRATIC FORM + INVERSES
// ============================================================================

/// Values a quadrance can take: the rationals and the 2-dimensional
/// algebras (Complex, Dual, Perplex).
pub trait Scalar: Algebra {
    /// True when the value has no multiplicative inverse.
    fn is_singular(&self) -> bool;
    fn try_recip(&self) -> Result<Self>;
    /// Collapses the value to a single rational.
    fn norm_value(&self) -> Rational;
}

pub trait Quadratic: Algebra {
    type Quadrance: Scalar;

    /// `x · Conj(x)`, read off as a quadrance value.
    fn quad(&self) -> Self::Quadrance;

    /// Multiplies by a quadrance value embedded in the center.
    fn scale_central(&self, q: &Self::Quadrance) -> Self;

    fn norm(&self) -> Rational {
        self.quad().norm_value()
    }

    fn is_zero_divisor(&self) -> bool {
        self.quad().is_singular()
    }

    /// `Conj(x) / Quad(x)`. Fails on zero divisors.
    fn inv(&self) -> Result<Self> {
        let q = self.quad();
        if q.is_singular() {
            let err = AlgebraError::zero_divisor(self);
            debug!(error = %err, "inversion refused");
            return Err(err);
        }
        let q_inv = q.try_recip()?;
        Ok(self.conj().scale_central(&q_inv))
    }

    /// `Inv(divisor) · self`
    fn quo_l(&self, divisor: &Self) -> Result<Self> {
        Ok(divisor.inv()?.mul(self))
    }

    /// `self · Inv(divisor)`
    fn quo_r(&self, divisor: &Self) -> Result<Self> {
        Ok(self.mul(&divisor.inv()?))
    }

    fn quo(&self, divisor: &Self) -> Result<Self> {
        self.quo_r(divisor)
    }
}
