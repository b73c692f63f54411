// src/tensor.rs
// The untwisted doubling step: adjoin a unit u that commutes with everything
// and is fixed by conjugation, i.e. A ⊗ (Rational + Rational·u).
// The quadrance no longer fits in the rationals; it lands in the 2-dimensional
// algebra spanned by 1 and u.

use std::marker::PhantomData;

use crate::algebra::{Algebra, Quadratic};
use crate::cayley_dickson::CayleyDickson;
use crate::flavor::Flavor;
use crate::rational::{int, Rational};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tensor<A, F> {
    pub left: A,
    pub right: A,
    flavor: PhantomData<F>,
}

impl<A, F> Tensor<A, F> {
    pub fn new(left: A, right: A) -> Self {
        Tensor {
            left,
            right,
            flavor: PhantomData,
        }
    }
}

impl<A: Algebra, F: Flavor> Algebra for Tensor<A, F> {
    const DIM: usize = 2 * A::DIM;

    fn zero() -> Self {
        Self::new(A::zero(), A::zero())
    }

    fn one() -> Self {
        Self::new(A::one(), A::zero())
    }

    fn from_rational(r: Rational) -> Self {
        Self::new(A::from_rational(r), A::zero())
    }

    fn add(&self, other: &Self) -> Self {
        Self::new(self.left.add(&other.left), self.right.add(&other.right))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.left.sub(&other.left), self.right.sub(&other.right))
    }

    fn neg(&self) -> Self {
        Self::new(self.left.neg(), self.right.neg())
    }

    fn scale(&self, t: &Rational) -> Self {
        Self::new(self.left.scale(t), self.right.scale(t))
    }

    // (a, b)* = (a*, b*)
    fn conj(&self) -> Self {
        Self::new(self.left.conj(), self.right.conj())
    }

    // (a + bu)(c + du) = (ac + γ bd) + (ad + bc)u
    fn mul(&self, other: &Self) -> Self {
        let (a, b) = (&self.left, &self.right);
        let (c, d) = (&other.left, &other.right);

        let left = a.mul(c).add(&F::twist(&b.mul(d)));
        let right = a.mul(d).add(&b.mul(c));

        Self::new(left, right)
    }

    fn real(&self) -> Rational {
        self.left.real()
    }

    fn push_coords(&self, out: &mut Vec<Rational>) {
        self.left.push_coords(out);
        self.right.push_coords(out);
    }

    fn from_slice(coords: &[Rational]) -> Self {
        let (l, r) = coords.split_at(A::DIM);
        Self::new(A::from_slice(l), A::from_slice(r))
    }
}

impl<A, F> Quadratic for Tensor<A, F>
where
    A: Quadratic<Quadrance = Rational>,
    F: Flavor,
{
    type Quadrance = CayleyDickson<Rational, F>;

    // x x* = (Q(a) + γ Q(b)) + (a b* + b a*)u, and a b* + b a* = 2 Re(a b*)
    fn quad(&self) -> Self::Quadrance {
        let (a, b) = (&self.left, &self.right);
        let scalar = a.quad().add(&F::twist(&b.quad()));
        let polar = a.mul(&b.conj()).real().scale(&int(2));
        CayleyDickson::new(scalar, polar)
    }

    // x (p + su) = (ap + γ bs) + (as + bp)u
    fn scale_central(&self, q: &Self::Quadrance) -> Self {
        let (a, b) = (&self.left, &self.right);
        let (p, s) = (&q.left, &q.right);
        let left = a.scale(p).add(&F::twist(&b.scale(s)));
        let right = a.scale(s).add(&b.scale(p));
        Self::new(left, right)
    }
}
