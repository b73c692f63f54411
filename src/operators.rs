// src/operators.rs
// Operator sugar over the Algebra methods, for both doubling kinds.

use std::ops::{Add, Mul, Neg, Sub};

use crate::algebra::Algebra;
use crate::cayley_dickson::CayleyDickson;
use crate::flavor::Flavor;
use crate::tensor::Tensor;

macro_rules! impl_operators {
    ($pair:ident) => {
        impl<A: Algebra, F: Flavor> Add for $pair<A, F> {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Algebra::add(&self, &other)
            }
        }

        impl<'a, A: Algebra, F: Flavor> Add for &'a $pair<A, F> {
            type Output = $pair<A, F>;
            fn add(self, other: Self) -> $pair<A, F> {
                Algebra::add(self, other)
            }
        }

        impl<A: Algebra, F: Flavor> Sub for $pair<A, F> {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Algebra::sub(&self, &other)
            }
        }

        impl<'a, A: Algebra, F: Flavor> Sub for &'a $pair<A, F> {
            type Output = $pair<A, F>;
            fn sub(self, other: Self) -> $pair<A, F> {
                Algebra::sub(self, other)
            }
        }

        impl<A: Algebra, F: Flavor> Mul for $pair<A, F> {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Algebra::mul(&self, &other)
            }
        }

        impl<'a, A: Algebra, F: Flavor> Mul for &'a $pair<A, F> {
            type Output = $pair<A, F>;
            fn mul(self, other: Self) -> $pair<A, F> {
                Algebra::mul(self, other)
            }
        }

        impl<A: Algebra, F: Flavor> Neg for $pair<A, F> {
            type Output = Self;
            fn neg(self) -> Self {
                Algebra::neg(&self)
            }
        }

        impl<'a, A: Algebra, F: Flavor> Neg for &'a $pair<A, F> {
            type Output = $pair<A, F>;
            fn neg(self) -> $pair<A, F> {
                Algebra::neg(self)
            }
        }
    };
}

impl_operators!(CayleyDickson);
impl_operators!(Tensor);
