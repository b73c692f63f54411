// src/cayley_dickson.rs
// The twisted doubling step. An element is a pair (left, right) of elements
// of the level below; the new unit u = (0, 1) squares to F::UNIT_SQUARE.

use std::marker::PhantomData;

use crate::algebra::{Algebra, Quadratic, Scalar};
use crate::error::Result;
use crate::flavor::Flavor;
use crate::rational::Rational;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CayleyDickson<A, F> {
    pub left: A,
    pub right: A,
    flavor: PhantomData<F>,
}

impl<A, F> CayleyDickson<A, F> {
    pub fn new(left: A, right: A) -> Self {
        CayleyDickson {
            left,
            right,
            flavor: PhantomData,
        }
    }
}

impl<A: Algebra, F: Flavor> Algebra for CayleyDickson<A, F> {
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

    // (a, b)* = (a*, -b)
    fn conj(&self) -> Self {
        Self::new(self.left.conj(), self.right.neg())
    }

    // (a, b)(c, d) = (ac + γ d*b, da + bc*)
    fn mul(&self, other: &Self) -> Self {
        let (a, b) = (&self.left, &self.right);
        let (c, d) = (&other.left, &other.right);

        let d_conj_b = d.conj().mul(b);
        let left = a.mul(c).add(&F::twist(&d_conj_b));
        let right = d.mul(a).add(&b.mul(&c.conj()));

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

impl<A: Quadratic, F: Flavor> Quadratic for CayleyDickson<A, F> {
    type Quadrance = A::Quadrance;

    // Q(a, b) = Q(a) - γ Q(b)
    fn quad(&self) -> A::Quadrance {
        let qa = self.left.quad();
        let qb = self.right.quad();
        qa.sub(&F::twist(&qb))
    }

    fn scale_central(&self, q: &A::Quadrance) -> Self {
        Self::new(self.left.scale_central(q), self.right.scale_central(q))
    }
}

// The 2-dimensional levels double as quadrance values for the central
// doublings one level up.
impl<F: Flavor> Scalar for CayleyDickson<Rational, F> {
    fn is_singular(&self) -> bool {
        self.is_zero_divisor()
    }

    fn try_recip(&self) -> Result<Self> {
        self.inv()
    }

    fn norm_value(&self) -> Rational {
        self.quad()
    }
}
