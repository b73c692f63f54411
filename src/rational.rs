// src/rational.rs
// Level 0 of the tower: exact fractions over arbitrary-precision integers.
// Conjugation is the identity and the quadrance is the square.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::algebra::{Algebra, Quadratic, Scalar};
use crate::error::{AlgebraError, Result};

pub type Rational = BigRational;

/// `n/d` in lowest terms. Panics when `d == 0`; use [`try_rat`] for input
/// that has not been checked.
pub fn rat(n: i64, d: i64) -> Rational {
    Rational::new(BigInt::from(n), BigInt::from(d))
}

pub fn try_rat(n: i64, d: i64) -> Result<Rational> {
    if d == 0 {
        return Err(AlgebraError::ZeroDenominator { numer: n });
    }
    Ok(rat(n, d))
}

pub fn int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

impl Algebra for Rational {
    const DIM: usize = 1;

    fn zero() -> Self {
        <Rational as Zero>::zero()
    }

    fn one() -> Self {
        <Rational as One>::one()
    }

    fn from_rational(r: Rational) -> Self {
        r
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn scale(&self, t: &Rational) -> Self {
        self * t
    }

    fn conj(&self) -> Self {
        self.clone()
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn real(&self) -> Rational {
        self.clone()
    }

    fn push_coords(&self, out: &mut Vec<Rational>) {
        out.push(self.clone());
    }

    fn from_slice(coords: &[Rational]) -> Self {
        coords[0].clone()
    }
}

impl Quadratic for Rational {
    type Quadrance = Rational;

    fn quad(&self) -> Rational {
        self * self
    }

    fn scale_central(&self, q: &Rational) -> Self {
        self * q
    }
}

impl Scalar for Rational {
    fn is_singular(&self) -> bool {
        Zero::is_zero(self)
    }

    fn try_recip(&self) -> Result<Self> {
        if Zero::is_zero(self) {
            return Err(AlgebraError::zero_divisor(self));
        }
        Ok(Rational::recip(self))
    }

    fn norm_value(&self) -> Rational {
        self.clone()
    }
}
