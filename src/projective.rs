// src/projective.rs
// Cross-ratios and Möbius transforms. In non-commutative algebras the side
// on which an inverse is applied matters, so both variants are provided and
// every product is bracketed explicitly.
// Any difference or denominator that is a zero divisor aborts with
// AlgebraError::ZeroDivisor.

use crate::algebra::Quadratic;
use crate::error::Result;

/// (Inv(w - x)(v - x)) (Inv(v - y)(w - y))
pub fn cross_ratio_l<A: Quadratic>(v: &A, w: &A, x: &A, y: &A) -> Result<A> {
    let first = w.sub(x).inv()?.mul(&v.sub(x));
    let second = v.sub(y).inv()?.mul(&w.sub(y));
    Ok(first.mul(&second))
}

/// ((v - x) Inv(w - x)) ((w - y) Inv(v - y))
pub fn cross_ratio_r<A: Quadratic>(v: &A, w: &A, x: &A, y: &A) -> Result<A> {
    let first = v.sub(x).mul(&w.sub(x).inv()?);
    let second = w.sub(y).mul(&v.sub(y).inv()?);
    Ok(first.mul(&second))
}

pub fn cross_ratio<A: Quadratic>(v: &A, w: &A, x: &A, y: &A) -> Result<A> {
    cross_ratio_l(v, w, x, y)
}

/// Inv(yc + d) (ya + b)
pub fn mobius_l<A: Quadratic>(y: &A, a: &A, b: &A, c: &A, d: &A) -> Result<A> {
    let numer = y.mul(a).add(b);
    let denom = y.mul(c).add(d);
    Ok(denom.inv()?.mul(&numer))
}

/// (ay + b) Inv(cy + d)
pub fn mobius_r<A: Quadratic>(y: &A, a: &A, b: &A, c: &A, d: &A) -> Result<A> {
    let numer = a.mul(y).add(b);
    let denom = c.mul(y).add(d);
    Ok(numer.mul(&denom.inv()?))
}

pub fn mobius<A: Quadratic>(y: &A, a: &A, b: &A, c: &A, d: &A) -> Result<A> {
    mobius_r(y, a, b, c, d)
}
