// src/products.rs
// Defects of the product: how far an algebra is from commutative and from
// associative. Both are written once over the Algebra surface.

use crate::algebra::Algebra;

/// [x, y] = xy - yx
pub fn commutator<A: Algebra>(x: &A, y: &A) -> A {
    x.mul(y).sub(&y.mul(x))
}

/// [w, x, y] = (wx)y - w(xy)
pub fn associator<A: Algebra>(w: &A, x: &A, y: &A) -> A {
    w.mul(x).mul(y).sub(&w.mul(&x.mul(y)))
}
